//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-user data; it only needs the outbound client and the
//! backend origin to forward API calls.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigError, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClientBuild` if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        // Redirects and cookies belong to the browser, so the client follows
        // neither.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
