//! Shared application state for the web server.

use std::sync::Arc;

use crate::config::Config;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

pub type SharedState = Arc<AppState>;
