//! Bounded Cache Module
//!
//! Main cache engine combining HashMap storage with LRU tracking under a
//! fixed capacity.

use std::collections::HashMap;

use bytes::Bytes;
use tracing::{debug, info};

use crate::cache::{CacheStats, LruTracker, DEFAULT_CAPACITY};
use crate::error::{ProxyError, Result};

// == Bounded Cache ==
/// Fixed-capacity key/value store with least-recently-used eviction.
///
/// `get` refreshes a key's recency. `set` on an existing key replaces the
/// value but keeps the key's position, so an old key that was just
/// overwritten is still first in line for eviction.
#[derive(Debug)]
pub struct BoundedCache {
    /// Key-value storage
    entries: HashMap<String, Bytes>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl Default for BoundedCache {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl BoundedCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with `InvalidConfiguration` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        check_capacity(capacity)?;
        Ok(Self {
            capacity,
            ..Self::default()
        })
    }

    // == Get ==
    /// Retrieves a value by key, marking it most recently used.
    ///
    /// A miss is `None`, never an error.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(value) => {
                let value = value.clone();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under `key`.
    ///
    /// An existing key is overwritten in place without refreshing its
    /// recency. A new key evicts at most one entry, the least recently
    /// used, when the cache already holds `capacity` entries.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            debug!(key = %key, "Cache entry overwritten");
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        self.lru.touch(&key);
        self.entries.insert(key.clone(), value);
        debug!(key = %key, len = self.entries.len(), "Cache entry stored");
    }

    // == Delete ==
    /// Removes an entry by key. Absent keys are a no-op.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            debug!(key = %key, "Cache entry deleted");
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes every entry. Capacity and statistics are kept.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        info!(removed, "Cache cleared");
    }

    // == Resize ==
    /// Changes the capacity, evicting oldest entries until the cache fits.
    ///
    /// Returns the number of entries evicted. Fails with
    /// `InvalidConfiguration` when `new_capacity` is zero, leaving the cache
    /// untouched.
    pub fn resize(&mut self, new_capacity: usize) -> Result<usize> {
        check_capacity(new_capacity)?;
        self.capacity = new_capacity;

        let mut evicted = 0;
        while self.entries.len() > new_capacity && self.evict_oldest() {
            evicted += 1;
        }

        info!(capacity = new_capacity, evicted, "Cache resized");
        Ok(evicted)
    }

    // == Snapshot ==
    /// Returns all entries, least recently used first, without touching them.
    pub fn snapshot(&self) -> Vec<(String, Bytes)> {
        self.lru
            .iter()
            .filter_map(|key| {
                self.entries
                    .get(key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats.capacity = self.capacity;
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Checks for a key without counting a lookup or touching recency.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) -> bool {
        match self.lru.evict_oldest() {
            Some(key) => {
                self.entries.remove(&key);
                self.stats.record_eviction();
                debug!(key = %key, "Cache entry evicted");
                true
            }
            None => false,
        }
    }
}

fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(ProxyError::InvalidConfiguration(
            "Cache capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}
