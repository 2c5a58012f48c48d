//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::validation::FieldError;

/// Body sent for every unexpected failure
pub const GENERIC_FAILURE: &str = "Something broke!";

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or invalid bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Request payload failed validation
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Requested user, movie, genre or director does not exist
    #[error("{0}")]
    NotFound(String),

    /// Authenticated identity does not own the target record
    #[error("Permission denied")]
    PermissionDenied,

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Validation(errors) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "errors": errors })),
                )
                    .into_response();
            }
            ApiError::NotFound(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PermissionDenied => {
                (StatusCode::BAD_REQUEST, "Permission denied".to_string())
            }
            ApiError::Database(DatabaseError::Conflict(key)) => {
                (StatusCode::BAD_REQUEST, format!("{} already exists", key))
            }
            ApiError::Database(err) => {
                error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE.to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ApiError::Validation(vec![]), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::NotFound("no such movie".into()), StatusCode::BAD_REQUEST),
            (ApiError::PermissionDenied, StatusCode::BAD_REQUEST),
            (
                ApiError::Database(DatabaseError::Conflict("abcde".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Database(DatabaseError::Migration("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
