//! HTTP server module.
//!
//! Serves the router over plain HTTP with graceful shutdown on
//! SIGTERM/SIGINT (connection draining via the axum-server `Handle`).

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
