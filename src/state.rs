//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;

/// Shared application state, cloneable across handlers via an Arc-wrapped
/// configuration.
///
/// The configuration is resolved once at startup and never mutated, so it is
/// safe to share across concurrent request handlers without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
