//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no user data; the only shared resource is the HTTP client for
//! the optional `/api/*` pass-through.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Target of the `/api/*` pass-through.
#[derive(Debug)]
pub struct Backend {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub http: reqwest::Client,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: Option<Arc<Backend>>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Build state from config, creating the backend client when configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let backend = match &config.backend_url {
            Some(base_url) => {
                let http = reqwest::Client::builder()
                    .timeout(config.backend_timeout)
                    .connect_timeout(config.backend_timeout.min(std::time::Duration::from_secs(10)))
                    .build()?;
                Some(Arc::new(Backend { base_url: base_url.clone(), http }))
            }
            None => None,
        };
        Ok(Self { backend, max_body_bytes: config.max_body_bytes })
    }
}
