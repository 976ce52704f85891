//! Completion-callback wrappers
//!
//! Each wrapper spawns the matching async fetch on the current Tokio runtime
//! and calls `completed` exactly once from that task. The returned handle
//! resolves after the callback has run. Calls are unordered relative to each
//! other. Must be called from within a Tokio runtime.

use std::sync::Arc;

use image::DynamicImage;
use tokio::task::JoinHandle;

use super::client::MealDbClient;
use super::types::{CategoryApiResponse, MealApiResponse, MealDetailsApiResponse};
use crate::error::Result;

impl MealDbClient {
    /// Fetch categories in the background and hand the result to `completed`
    pub fn get_categories_then<F>(&self, completed: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<CategoryApiResponse>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { completed(client.get_categories().await) })
    }

    /// Fetch a category's meals in the background
    pub fn get_meals_then<F>(&self, category: &str, completed: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<MealApiResponse>) + Send + 'static,
    {
        let client = self.clone();
        let category = category.to_string();
        tokio::spawn(async move { completed(client.get_meals(&category).await) })
    }

    /// Fetch meal details in the background
    pub fn get_meal_details_then<F>(&self, meal_id: &str, completed: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<MealDetailsApiResponse>) + Send + 'static,
    {
        let client = self.clone();
        let meal_id = meal_id.to_string();
        tokio::spawn(async move { completed(client.get_meal_details(&meal_id).await) })
    }

    /// Fetch an image (through the cache) in the background
    pub fn download_image_then<F>(&self, url: &str, completed: F) -> JoinHandle<()>
    where
        F: FnOnce(Option<Arc<DynamicImage>>) + Send + 'static,
    {
        let client = self.clone();
        let url = url.to_string();
        tokio::spawn(async move { completed(client.download_image(&url).await) })
    }
}
