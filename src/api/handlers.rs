//! API Handlers
//!
//! HTTP request handlers for the proxy and cache administration endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::cache::{shared, BoundedCache, SharedCache};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::fetcher::{CacheAsideFetcher, HttpUpstream, Upstream};
use crate::models::{
    HealthResponse, KeyQuery, MessageResponse, ResizeQuery, ResizeResponse, SetQuery,
    StateResponse, StatsResponse, UpdateRequest,
};

/// Application state shared across all handlers.
///
/// The fetcher and the administration routes share one cache handle.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache
    pub cache: SharedCache,
    /// Cache-aside front for the upstream
    pub fetcher: CacheAsideFetcher,
    /// Base URL that `/cats/:status` locators are built from
    pub upstream_base_url: String,
}

impl AppState {
    /// Creates a new AppState around the given cache and upstream.
    pub fn new(
        cache: BoundedCache,
        upstream: Arc<dyn Upstream>,
        upstream_base_url: impl Into<String>,
    ) -> Self {
        let cache = shared(cache);
        Self {
            fetcher: CacheAsideFetcher::new(cache.clone(), upstream),
            cache,
            upstream_base_url: upstream_base_url.into(),
        }
    }

    /// Creates a new AppState from configuration, using the HTTP upstream.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let cache = BoundedCache::new(config.cache_capacity)?;
        let upstream = HttpUpstream::new(config.upstream_timeout())?;
        Ok(Self::new(
            cache,
            Arc::new(upstream),
            config.upstream_base_url.clone(),
        ))
    }

    /// Locator for an HTTP status image.
    pub fn cat_locator(&self, status: u16) -> String {
        format!("{}/{}", self.upstream_base_url, status)
    }
}

/// Handler for GET /cats/:status
///
/// Serves the status image through the cache.
pub async fn cat_handler(
    State(state): State<AppState>,
    Path(status): Path<u16>,
) -> Result<impl IntoResponse> {
    let locator = state.cat_locator(status);
    let payload = state.fetcher.fetch(&locator).await?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], payload))
}

/// Handler for POST /cache/clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cache.write().await.clear();
    Json(MessageResponse::new("Cache cleared"))
}

/// Handler for POST /cache/resize?size=N
pub async fn resize_handler(
    State(state): State<AppState>,
    Query(query): Query<ResizeQuery>,
) -> Result<Json<ResizeResponse>> {
    let capacity = query.capacity().map_err(ProxyError::InvalidRequest)?;

    let evicted = state.cache.write().await.resize(capacity)?;

    Ok(Json(ResizeResponse::new(capacity, evicted)))
}

/// Handler for POST /cache/update
///
/// Stores a key-value pair supplied as JSON.
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    state.cache.write().await.set(req.key.clone(), req.value);
    info!(key = %req.key, "Cache updated");

    Ok(Json(MessageResponse::for_key("Cache updated", req.key)))
}

/// Handler for GET /cache/set?key=&value=
pub async fn set_handler(
    State(state): State<AppState>,
    Query(query): Query<SetQuery>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    state.cache.write().await.set(query.key.clone(), query.value);
    info!(key = %query.key, "Cache set");

    Ok(Json(MessageResponse::for_key("Cache set", query.key)))
}

/// Handler for DELETE /cache/delete?key=
///
/// Deleting an absent key still succeeds.
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    state.cache.write().await.delete(&query.key);

    Ok(Json(MessageResponse::for_key("Cache deleted", query.key)))
}

/// Handler for GET /cache/state
pub async fn state_handler(State(state): State<AppState>) -> Json<StateResponse> {
    let cache = state.cache.read().await;
    Json(StateResponse::new(cache.capacity(), cache.snapshot()))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
