use std::sync::Arc;

use image::ImageError;

use crate::cli::args::{ImageArgs, OutputFormat};
use crate::error::{CookbookError, Result};
use crate::mealdb::MealDbClient;
use crate::output::{self, ImageReport};

/// Handle the image command
///
/// Fetches the URL `--repeat` times in sequence; every fetch after the first
/// successful one is served from the in-memory cache.
pub async fn image(client: &MealDbClient, args: &ImageArgs, format: OutputFormat) -> Result<String> {
    let mut fetches = Vec::with_capacity(args.repeat as usize);
    let mut image = None;

    for _ in 0..args.repeat {
        let source = if client.images().contains(&args.url) {
            "cache"
        } else {
            "network"
        };
        let fetched = client
            .download_image(&args.url)
            .await
            .ok_or_else(|| CookbookError::ImageUnavailable(args.url.clone()))?;
        fetches.push(source.to_string());
        image = Some(fetched);
    }

    let image = image.ok_or_else(|| CookbookError::ImageUnavailable(args.url.clone()))?;

    if let Some(ref path) = args.save {
        let to_save = Arc::clone(&image);
        let target = path.clone();
        tokio::task::spawn_blocking(move || to_save.save(&target))
            .await
            .map_err(|e| CookbookError::Io(std::io::Error::other(e)))?
            .map_err(|e| save_error(path, e))?;
    }

    let report = ImageReport {
        url: args.url.clone(),
        width: image.width(),
        height: image.height(),
        color: format!("{:?}", image.color()),
        fetches,
        saved_to: args.save.clone(),
        cache: client.images().status().await,
    };

    output::format_image_report(&report, format)
}

/// Filesystem failures stay I/O errors; anything else is a bad target path
fn save_error(path: &str, err: ImageError) -> CookbookError {
    match err {
        ImageError::IoError(e) => CookbookError::Io(e),
        other => CookbookError::InvalidArgument(format!("Failed to save image to {path}: {other}")),
    }
}
