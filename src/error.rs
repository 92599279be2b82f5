//! Error types for the caching proxy
//!
//! Provides unified error handling using thiserror. Cache misses are not
//! errors and never appear here; they are `None` results.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Fetch Error Enum ==
/// Failure of the upstream retrieval step.
///
/// Propagated unchanged to the caller of the fetcher. Never cached and never
/// retried internally.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout or body decoding failure
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status} for {locator}")]
    Status { locator: String, status: u16 },

    /// Upstream could not be reached for any other reason
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}

// == Proxy Error Enum ==
/// Unified error type for the caching proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Capacity or other setting outside its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Upstream retrieval failed
    #[error(transparent)]
    Upstream(#[from] FetchError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::InvalidConfiguration(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the caching proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
