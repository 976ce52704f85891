//! In-memory caching for downloaded images
//!
//! Nothing is persisted; entries live as long as the owning client.

mod images;

pub use images::ImageCache;

/// Snapshot of cache occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CacheStatus {
    /// Number of cached images
    pub entries: u64,
    /// Sum of decoded image sizes in bytes
    pub weighted_bytes: u64,
    /// Configured upper bound in bytes
    pub capacity_bytes: u64,
}
