//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{ProxyError, Result};

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial number of entries the cache can hold
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL that `/cats/:status` locators are built from
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds, 0 disables it
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Initial cache capacity (default: 2)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_BASE_URL` - Upstream base URL (default: https://http.cat)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            cache_capacity: lookup("CACHE_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            upstream_base_url: lookup("UPSTREAM_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.upstream_base_url),
            upstream_timeout: lookup("UPSTREAM_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upstream_timeout),
        }
    }

    /// Rejects settings the proxy cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(ProxyError::InvalidConfiguration(
                "CACHE_CAPACITY must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Upstream timeout as a Duration, None when disabled.
    pub fn upstream_timeout(&self) -> Option<Duration> {
        (self.upstream_timeout > 0).then(|| Duration::from_secs(self.upstream_timeout))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            server_port: 3000,
            upstream_base_url: "https://http.cat".to_string(),
            upstream_timeout: 10,
        }
    }
}
