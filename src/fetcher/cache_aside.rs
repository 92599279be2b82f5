//! Cache-Aside Fetcher
//!
//! Serves a locator from the shared cache, falling back to the upstream on a
//! miss and populating the cache with the result.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::cache::SharedCache;
use crate::error::FetchError;
use crate::fetcher::Upstream;

/// Cache-aside front for an upstream.
///
/// The cache lock is released while the upstream call is in flight, so
/// concurrent misses on one locator each reach the upstream. Both store the
/// same payload, which is harmless.
#[derive(Clone)]
pub struct CacheAsideFetcher {
    cache: SharedCache,
    upstream: Arc<dyn Upstream>,
}

impl CacheAsideFetcher {
    pub fn new(cache: SharedCache, upstream: Arc<dyn Upstream>) -> Self {
        Self { cache, upstream }
    }

    /// The cache this fetcher reads and populates.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the payload for `locator`.
    ///
    /// A hit never touches the upstream. A miss performs exactly one upstream
    /// retrieval; on failure the error is returned and the cache is left as
    /// it was.
    pub async fn fetch(&self, locator: &str) -> Result<Bytes, FetchError> {
        // Write lock: a hit moves the key to the most recent end.
        let cached = self.cache.write().await.get(locator);
        if let Some(payload) = cached {
            debug!(locator, "Cache hit");
            return Ok(payload);
        }

        debug!(locator, "Cache miss, fetching upstream");
        let payload = match self.upstream.fetch(locator).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(locator, error = %err, "Upstream fetch failed");
                return Err(err);
            }
        };

        self.cache.write().await.set(locator, payload.clone());
        info!(locator, bytes = payload.len(), "Cached upstream payload");
        Ok(payload)
    }
}
