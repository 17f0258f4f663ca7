//! Tally: a bearer-token gated balance lookup service.
//!
//! This is the application entry point. It resolves configuration from the
//! environment, initializes tracing, sets up the Axum router, and starts the
//! HTTP server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally::config::{ServiceConfig, DEFAULT_LOG_FILTER};
use tally::http::start_server;
use tally::routes::create_router;
use tally::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Resolve configuration (never fails; missing variables become defaults)
    let config = ServiceConfig::from_env();

    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // ServiceConfig's Debug output redacts the bearer secret
    tracing::info!(config = ?config, "Loaded configuration");

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server (blocks until shutdown)
    start_server(app, &config).await?;

    Ok(())
}
