//! Health check endpoints
//!
//! Provides endpoints for monitoring and container orchestration:
//! - `/health` - Full health check with version and uptime
//! - `/health/ready` - Readiness probe
//! - `/health/live` - Liveness probe
//!
//! The proxy has no backing services of its own (the upstream routing API is
//! contacted per request, not pooled), so readiness follows liveness.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

/// Simple health response for liveness/readiness
#[derive(Debug, Serialize)]
pub struct SimpleHealthResponse {
    pub status: &'static str,
}

/// Full health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Readiness probe endpoint
///
/// Used by orchestrators to decide when to route traffic to the process.
pub async fn readiness_check() -> Json<SimpleHealthResponse> {
    Json(SimpleHealthResponse { status: "healthy" })
}

/// Liveness probe endpoint
pub async fn liveness_check() -> Json<SimpleHealthResponse> {
    Json(SimpleHealthResponse { status: "healthy" })
}
