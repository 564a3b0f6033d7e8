//! Handler for the root endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed payload returned by the root endpoint.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Root handler. Returns a fixed greeting with no inputs or side effects.
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Docker!".to_string(),
    })
}
