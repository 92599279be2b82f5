//! Upstream retrieval
//!
//! The single outbound capability the fetcher depends on: turn a locator into
//! a binary payload, or fail.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::FetchError;

// == Upstream Trait ==
/// Retrieves the binary payload identified by a locator.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Bytes, FetchError>;
}

// == HTTP Upstream ==
/// reqwest-backed upstream issuing one GET per call.
///
/// Bodies are returned as raw bytes. Non-success statuses are failures.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Creates an upstream with an optional per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch(&self, locator: &str) -> Result<Bytes, FetchError> {
        let response = self.client.get(locator).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                locator: locator.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(locator, bytes = body.len(), "Upstream payload received");
        Ok(body)
    }
}
