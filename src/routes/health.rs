//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify
//! the service is alive. There is no dependency check behind it: the probe
//! only proves the process can respond to HTTP.

use axum::Json;
use serde::Serialize;

/// Fixed payload returned by the health endpoint.
///
/// The `status` field is always present and non-empty; `"OK"` is the only
/// value the success path produces.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check handler.
///
/// Always succeeds. The response is constructed fresh per request and
/// discarded after serialization.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
