//! HTTP route handlers.
//!
//! The surface is intentionally tiny: a root endpoint and a health probe.
//! A permissive CORS policy is applied globally so browser-based dashboards
//! can call the probe from any origin, and request tracing is enabled via
//! middleware that generates a unique request ID for each incoming request,
//! allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and global layers.
///
/// The health probe is reachable both with and without a trailing slash,
/// since orchestrators are configured inconsistently on that point.
///
/// `CorsLayer::very_permissive` mirrors the request origin instead of
/// sending a wildcard, which is the only way to allow arbitrary origins
/// while also allowing credentials.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route("/health/", get(health::health))
        .layer(CorsLayer::very_permissive())
        .layer(middleware::from_fn(request_id_layer))
}
