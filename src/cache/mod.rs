//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction.

mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::BoundedCache;

/// Process-wide cache handle. Every access goes through this one lock.
pub type SharedCache = Arc<RwLock<BoundedCache>>;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 2;

/// Wraps a cache in the shared handle.
pub fn shared(cache: BoundedCache) -> SharedCache {
    Arc::new(RwLock::new(cache))
}
