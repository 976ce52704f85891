pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cache::CacheStatus;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::mealdb::{Category, Meal, MealDetail};

/// Result of the image command
#[derive(Debug, Clone, Serialize)]
pub struct ImageReport {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub color: String,
    /// Where each fetch was served from: "network" or "cache"
    pub fetches: Vec<String>,
    pub saved_to: Option<String>,
    pub cache: CacheStatus,
}

/// Format a list of categories based on output format
pub fn format_categories(categories: &[Category], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_categories(categories)),
        OutputFormat::Json => json::format_json(&categories),
    }
}

/// Format the meals of a category based on output format
pub fn format_meals(category: &str, meals: &[Meal], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_meals(category, meals)),
        OutputFormat::Json => json::format_json(&meals),
    }
}

/// Format a single meal based on output format
pub fn format_meal(meal: &MealDetail, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_meal(meal)),
        OutputFormat::Json => json::format_meal(meal),
    }
}

/// Format an image download report based on output format
pub fn format_image_report(report: &ImageReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_image_report(report)),
        OutputFormat::Json => json::format_json(report),
    }
}
