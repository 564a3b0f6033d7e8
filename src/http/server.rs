//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// Emits the startup notice once the server begins accepting connections and
/// the shutdown notice after it stops, on every exit path including errors.
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Application starting up");

    let result = axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await;

    // Fires whether serve returned cleanly after a drain or with an error.
    tracing::info!("Application shutting down");

    result.map_err(ServerError::Server)
}
