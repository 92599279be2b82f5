//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cat_handler, clear_handler, delete_handler, health_handler, resize_handler, set_handler,
    state_handler, stats_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cats/:status", get(cat_handler))
        .route("/cache/clear", post(clear_handler))
        .route("/cache/resize", post(resize_handler))
        .route("/cache/update", post(update_handler))
        .route("/cache/set", get(set_handler))
        .route("/cache/delete", delete(delete_handler))
        .route("/cache/state", get(state_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
