//! HTTP server startup and lifecycle.
//!
//! The server runs plain HTTP (TLS termination is left to whatever sits in
//! front of the service) and shuts down gracefully on SIGTERM/SIGINT,
//! draining in-flight connections before the process exits.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
