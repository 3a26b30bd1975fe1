//! Directions endpoint
//!
//! The proxy's single business endpoint: validates the query, forwards it to
//! the routing provider with the server-held credential, and relays the
//! provider's JSON response verbatim.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    proxy::DirectionsQuery,
    AppState,
};

/// Travel mode used when the client does not supply one
const DEFAULT_MODE: &str = "driving";

/// Query parameters accepted by `GET /directions`
#[derive(Debug, Deserialize)]
pub struct DirectionsParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub mode: Option<String>,
}

/// Handle `GET /directions`
///
/// Each request is stateless and independent. An empty parameter is treated
/// the same as an absent one; validation failures are rejected before any
/// outbound call is made. The provider response passes through untouched,
/// whatever its semantic content.
pub async fn get_directions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DirectionsParams>,
) -> AppResult<Json<Value>> {
    let origin = params.origin.filter(|origin| !origin.is_empty());
    let destination = params.destination.filter(|destination| !destination.is_empty());

    let (origin, destination) = match (origin, destination) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => return Err(AppError::MissingRouteParameters),
    };

    let query = DirectionsQuery {
        origin,
        destination,
        mode: params.mode.unwrap_or_else(|| DEFAULT_MODE.to_string()),
    };

    info!(
        origin = %query.origin,
        destination = %query.destination,
        mode = %query.mode,
        provider = state.provider.name(),
        "Proxying directions request"
    );

    let body = state.provider.directions(&query).await?;

    Ok(Json(body))
}
