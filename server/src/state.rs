//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for every proxied call plus the backend base
//! URL. Clone is cheap: `reqwest::Client` is reference-counted internally.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build state with a client honoring the configured upstream timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self::with_client(http, &config.api_url))
    }

    pub fn with_client(http: reqwest::Client, upstream: &str) -> Self {
        Self {
            http,
            upstream: Arc::from(upstream.trim_end_matches('/')),
        }
    }
}
