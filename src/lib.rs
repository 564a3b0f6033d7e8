//! Steady: a minimal liveness-probe HTTP service.
//!
//! The library exposes the configuration layer, the router, and the server
//! lifecycle so integration tests can exercise the full HTTP surface
//! in-process.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
