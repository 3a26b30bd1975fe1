//! Wayfinder - Directions proxy with a server-held credential
//!
//! This library provides the core functionality for the Wayfinder proxy
//! server. It forwards client requests for travel directions to the Google
//! Maps Directions API, injecting the server-held API key so the credential
//! is never exposed to the calling client.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::{DirectionsQuery, GoogleMaps, RoutingProvider};

/// Application state shared across all request handlers
///
/// Handlers hold no shared mutable state: everything here is immutable after
/// startup, so requests proceed independently with no locking.
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Routing provider that forwards requests to the upstream directions API
    pub provider: Arc<dyn RoutingProvider>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Connection reuse comes from the pooled client; no request timeout
        // is configured, so a hung upstream call hangs only the one request
        // waiting on it.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let provider: Arc<dyn RoutingProvider> =
            Arc::new(GoogleMaps::new(http_client, &config));

        Ok(Self {
            config,
            start_time: Instant::now(),
            provider,
        })
    }

    /// Create a new application state for testing with an injected provider
    ///
    /// Integration tests point the provider at a wiremock stub of the
    /// upstream directions API.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, provider: Arc<dyn RoutingProvider>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            provider,
        }
    }
}
