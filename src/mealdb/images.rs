//! Image download through the client's cache

use std::sync::Arc;

use image::DynamicImage;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use super::client::MealDbClient;
use crate::error::{CookbookError, Result};

impl MealDbClient {
    /// Fetch an image, checking the cache first
    ///
    /// Any failure (bad URL, network error, non-200, empty body, bytes that
    /// are not an image) yields `None`; the cause is only logged. Concurrent
    /// calls for the same URL are not coalesced and may both hit the network.
    pub async fn download_image(&self, url: &str) -> Option<Arc<DynamicImage>> {
        if let Some(image) = self.images.get(url).await {
            debug!(url, "image cache hit");
            return Some(image);
        }

        debug!(url, "image cache miss");
        match self.fetch_image(url).await {
            Ok(image) => {
                let image = Arc::new(image);
                self.images.insert(url, Arc::clone(&image)).await;
                Some(image)
            }
            Err(e) => {
                debug!(url, error = %e, "image unavailable");
                None
            }
        }
    }

    /// Download and decode an image without touching the cache
    async fn fetch_image(&self, url: &str) -> Result<DynamicImage> {
        let url = Url::parse(url).map_err(|e| CookbookError::InvalidUrl(format!("{url}: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CookbookError::UnableToComplete)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CookbookError::invalid_response(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(CookbookError::UnableToComplete)?;
        if bytes.is_empty() {
            return Err(CookbookError::invalid_data("empty image body"));
        }

        // Format is sniffed from the bytes; decoding is CPU-bound
        tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| CookbookError::invalid_data(format!("image decode task failed: {e}")))?
            .map_err(|e| CookbookError::invalid_data(format!("undecodable image: {e}")))
    }
}
