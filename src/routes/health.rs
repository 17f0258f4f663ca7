//! Health check endpoint.
//!
//! Liveness probe for load balancers and container orchestrators: 200 OK
//! whenever the process can answer HTTP at all.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
