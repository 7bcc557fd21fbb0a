pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod stripe;

use std::sync::Arc;

use crate::config::Config;

/// Shared per-process state: immutable configuration plus one reusable
/// outbound HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
