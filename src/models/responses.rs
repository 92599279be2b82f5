//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use bytes::Bytes;
use serde::Serialize;

use crate::cache::CacheStats;

/// Plain acknowledgement for cache administration routes
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human readable outcome
    pub message: String,
    /// Key the operation applied to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: None,
        }
    }

    pub fn for_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}

/// Response body for POST /cache/resize
#[derive(Debug, Clone, Serialize)]
pub struct ResizeResponse {
    pub message: String,
    /// New capacity
    pub capacity: usize,
    /// Entries evicted to fit the new capacity
    pub evicted: usize,
}

impl ResizeResponse {
    pub fn new(capacity: usize, evicted: usize) -> Self {
        Self {
            message: format!("Cache resized to {}", capacity),
            capacity,
            evicted,
        }
    }
}

/// One cached entry as shown by GET /cache/state
#[derive(Debug, Clone, Serialize)]
pub struct StateEntry {
    pub key: String,
    /// Payload length in bytes
    pub size: usize,
}

/// Response body for GET /cache/state
///
/// Entries are listed least recently used first.
#[derive(Debug, Clone, Serialize)]
pub struct StateResponse {
    pub capacity: usize,
    pub len: usize,
    pub entries: Vec<StateEntry>,
}

impl StateResponse {
    pub fn new(capacity: usize, snapshot: Vec<(String, Bytes)>) -> Self {
        let entries: Vec<StateEntry> = snapshot
            .into_iter()
            .map(|(key, value)| StateEntry {
                key,
                size: value.len(),
            })
            .collect();
        Self {
            capacity,
            len: entries.len(),
            entries,
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Current capacity
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
