//! Common test utilities for Wayfinder
//!
//! This module provides the shared test harness and fixtures used across the
//! integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;

use wayfinder::{routes, AppState, Config, GoogleMaps, RoutingProvider};

use crate::mocks::google::MockGoogleMaps;

/// Test configuration constants
pub mod constants {
    /// Server-held credential injected into outbound URLs during tests
    pub const TEST_API_KEY: &str = "test-google-maps-api-key";
}

/// Build a test config pointing the provider at the given upstream base URL
pub fn test_config(upstream_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Let OS assign port
        google_maps_api_url: upstream_url.to_string(),
        google_maps_api_key: constants::TEST_API_KEY.to_string(),
    }
}

/// Test harness for blackbox proxy tests
///
/// Creates a complete test environment with:
/// - Mock directions API (wiremock)
/// - Real app router with all middleware
/// - In-process test server (axum-test)
///
/// # Example
///
/// ```ignore
/// let app = TestApp::start().await;
/// app.upstream
///     .mock_directions_success(MockGoogleMaps::sample_route_response())
///     .await;
///
/// let response = app.server
///     .get("/directions")
///     .add_query_param("origin", "New York")
///     .add_query_param("destination", "Boston")
///     .await;
///
/// response.assert_status_ok();
/// ```
pub struct TestApp {
    pub server: TestServer,
    pub upstream: MockGoogleMaps,
}

impl TestApp {
    /// Create a new test harness backed by a fresh mock upstream
    pub async fn start() -> Self {
        let upstream = MockGoogleMaps::start().await;
        Self::with_upstream_url(upstream, None).await
    }

    /// Create a test harness whose provider targets an arbitrary base URL
    ///
    /// Used to simulate an unreachable upstream: pass a URL nothing listens
    /// on and the mock server is left unused.
    pub async fn start_with_unreachable_upstream() -> Self {
        let upstream = MockGoogleMaps::start().await;
        // Bind and immediately drop a listener so the port is free but closed.
        let closed_port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0")
                .expect("Failed to bind probe listener");
            listener.local_addr().expect("No local addr").port()
        };
        let url = format!("http://127.0.0.1:{}", closed_port);
        Self::with_upstream_url(upstream, Some(url)).await
    }

    async fn with_upstream_url(upstream: MockGoogleMaps, url_override: Option<String>) -> Self {
        let base_url = url_override.unwrap_or_else(|| upstream.uri());
        let config = test_config(&base_url);

        let provider: Arc<dyn RoutingProvider> =
            Arc::new(GoogleMaps::new(reqwest::Client::new(), &config));

        let state = Arc::new(AppState::new_for_testing(config, provider));
        let server = TestServer::new(routes::create_router(state))
            .expect("Failed to create test server");

        Self { server, upstream }
    }
}
