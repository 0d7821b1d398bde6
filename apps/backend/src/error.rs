//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Collection {0} not found")]
    CollectionNotFound(Uuid),

    #[error("Card {0:?} not found")]
    CardNotFound(String),

    #[error("Missing `{name}` in {location}")]
    MissingParameter {
        name: &'static str,
        location: &'static str,
    },

    #[error("Cannot generate card: {0}")]
    GenerationFailed(String),

    #[error("Cannot check card: {0}")]
    CheckFailed(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::CollectionNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::CardNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::MissingParameter { .. } => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::GenerationFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "generation_failed"),
            ApiError::CheckFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "check_failed"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
