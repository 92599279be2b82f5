//! Fetcher Module
//!
//! Cache-aside retrieval of upstream resources.
//!
//! # Flow
//! - Look the locator up in the shared cache
//! - On a miss, retrieve it once from the upstream
//! - Store the payload under the locator and return it

mod cache_aside;
mod upstream;

pub use cache_aside::CacheAsideFetcher;
pub use upstream::{HttpUpstream, Upstream};
