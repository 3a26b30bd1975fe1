//! Error types for Wayfinder
//!
//! This module defines custom error types used throughout the application.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors
///
/// The taxonomy is deliberately small: a request either fails validation
/// before any upstream call is made, or the single upstream fetch fails.
/// Network failure, a non-JSON body, and a JSON decode failure all collapse
/// into [`AppError::DirectionsFetch`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("origin and destination are required")]
    MissingRouteParameters,

    #[error("Failed to fetch directions: {0}")]
    DirectionsFetch(String),
}

/// Error response body
///
/// The wire shape is fixed: `error` always, `details` only for upstream
/// failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::MissingRouteParameters => (
                StatusCode::BAD_REQUEST,
                "origin and destination are required".to_string(),
                None,
            ),
            AppError::DirectionsFetch(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch directions".to_string(),
                Some(details),
            ),
        };

        let body = ErrorResponse { error, details };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
