use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::types::*;
use crate::cache::ImageCache;
use crate::config::Config;
use crate::error::{CookbookError, Result};

const USER_AGENT: &str = concat!("cookbook/", env!("CARGO_PKG_VERSION"));

/// TheMealDB API client
///
/// Owns its image cache. Cloning is cheap and clones share the HTTP
/// connection pool and the cache.
#[derive(Clone, Debug)]
pub struct MealDbClient {
    pub(super) client: Client,
    pub(super) images: ImageCache,
    base_url: String,
}

impl MealDbClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let images = ImageCache::new(config.images.cache_capacity_bytes());
        Self::with_base_url(&config.api.base_url, images)
    }

    /// Create a client against an explicit base URL with the given cache
    ///
    /// The base URL is only parsed when a request is made, so a malformed
    /// value surfaces as `InvalidUrl` from the fetch call.
    pub fn with_base_url(base_url: impl Into<String>, images: ImageCache) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CookbookError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            images,
            base_url: base_url.into(),
        })
    }

    /// Base URL endpoints are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The image cache shared by all clones of this client
    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    /// Resolve an endpoint path (and optional query pair) against the base URL
    fn endpoint_url(&self, path: &str, query: Option<(&str, &str)>) -> Result<Url> {
        // Url::join drops the last segment unless the base ends with a slash
        let base = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };

        let mut url = Url::parse(&base)
            .and_then(|base| base.join(path))
            .map_err(|e| CookbookError::InvalidUrl(format!("{base}{path}: {e}")))?;

        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url)
    }

    /// GET a URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(CookbookError::UnableToComplete)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%url, status = status.as_u16(), "unexpected response status");
            return Err(CookbookError::invalid_response(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(CookbookError::UnableToComplete)?;
        if body.is_empty() {
            return Err(CookbookError::invalid_data("empty response body"));
        }

        serde_json::from_slice(&body).map_err(|e| {
            debug!(%url, error = %e, "response did not match schema");
            CookbookError::invalid_data(e.to_string())
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Category Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// List all meal categories
    pub async fn get_categories(&self) -> Result<CategoryApiResponse> {
        let url = self.endpoint_url("categories.php", None)?;
        self.get_json(url).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Meal Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// List meals filed under a category
    pub async fn get_meals(&self, category: &str) -> Result<MealApiResponse> {
        let url = self.endpoint_url("filter.php", Some(("c", category)))?;
        self.get_json(url).await
    }

    /// Look up full details for a meal by id
    pub async fn get_meal_details(&self, meal_id: &str) -> Result<MealDetailsApiResponse> {
        let url = self.endpoint_url("lookup.php", Some(("i", meal_id)))?;
        self.get_json(url).await
    }
}
