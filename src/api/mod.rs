//! API Module
//!
//! HTTP handlers and routing for the caching proxy.
//!
//! # Endpoints
//! - `GET /cats/:status` - Status image served through the cache
//! - `POST /cache/clear` - Remove every cached entry
//! - `POST /cache/resize?size=N` - Change the cache capacity
//! - `POST /cache/update` - Store a key-value pair (JSON body)
//! - `GET /cache/set?key=&value=` - Store a key-value pair
//! - `DELETE /cache/delete?key=` - Remove one entry
//! - `GET /cache/state` - Cached keys, least recently used first
//! - `GET /cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
