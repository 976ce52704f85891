//! Decoded image cache keyed by URL string

use std::sync::Arc;

use image::DynamicImage;
use moka::future::Cache;

use crate::cache::CacheStatus;

/// Thread-safe, weight-bounded image cache
///
/// Each entry weighs the size of its decoded pixel buffer. Eviction is left
/// entirely to moka once the total weight exceeds `capacity_bytes`. Clones
/// share the same underlying storage.
#[derive(Clone)]
pub struct ImageCache {
    cache: Cache<String, Arc<DynamicImage>>,
    capacity_bytes: u64,
}

impl ImageCache {
    /// Create an empty cache bounded to `capacity_bytes` of decoded pixels
    pub fn new(capacity_bytes: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity_bytes)
            .weigher(|_url: &String, image: &Arc<DynamicImage>| -> u32 {
                image.as_bytes().len().try_into().unwrap_or(u32::MAX)
            })
            .build();

        Self {
            cache,
            capacity_bytes,
        }
    }

    /// Look up an image by exact URL string
    pub async fn get(&self, url: &str) -> Option<Arc<DynamicImage>> {
        self.cache.get(url).await
    }

    /// Store an image, replacing any previous entry for the same URL
    pub async fn insert(&self, url: &str, image: Arc<DynamicImage>) {
        self.cache.insert(url.to_string(), image).await;
    }

    /// Check whether an entry exists without touching its recency
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains_key(url)
    }

    /// Current occupancy after applying pending evictions
    pub async fn status(&self) -> CacheStatus {
        self.cache.run_pending_tasks().await;
        CacheStatus {
            entries: self.cache.entry_count(),
            weighted_bytes: self.cache.weighted_size(),
            capacity_bytes: self.capacity_bytes,
        }
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("entries", &self.cache.entry_count())
            .field("capacity_bytes", &self.capacity_bytes)
            .finish()
    }
}
