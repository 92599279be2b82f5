//! Cache Proxy - A read-through HTTP proxy with a bounded in-memory cache
//!
//! Serves binary resources from a remote HTTP source, keeping recently used
//! payloads in an LRU cache keyed by request URL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;

pub use api::AppState;
pub use cache::{BoundedCache, SharedCache};
pub use config::Config;
pub use error::{FetchError, ProxyError};
pub use fetcher::{CacheAsideFetcher, HttpUpstream, Upstream};
