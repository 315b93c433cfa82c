//! HTTP error handling and response types.
//!
//! Domain not-found outcomes render as the structured [`RestError`] JSON
//! body; every other error kind renders as plain text, per the API
//! contract.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::RestError;
use crate::db::services::ServiceError;
use crate::services::validation::ValidationError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource absent; the message becomes the RestError body.
    NotFound(String),
    /// Invalid request (validation or malformed input)
    BadRequest(String),
    /// A path parameter that should be a UUID was not one.
    UuidMalformed(String),
    /// Uniqueness violation
    Conflict(String),
    /// Missing or bad Basic credentials
    Unauthorized,
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(RestError::not_found(message))).into_response()
            }
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            AppError::UuidMalformed(literal) => (
                StatusCode::BAD_REQUEST,
                format!("'{}' is not a valid UUID", literal),
            )
                .into_response(),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Restricted\"")],
                "invalid username or password",
            )
                .into_response(),
            AppError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::LegalBasisNotFound(_) => AppError::BadRequest(err.to_string()),
            ServiceError::DuplicateReference(_)
            | ServiceError::DuplicateShortName(_)
            | ServiceError::SelectorConflict => AppError::Conflict(err.to_string()),
            ServiceError::SurveyNotFound => AppError::NotFound("Survey not found".to_string()),
            ServiceError::SelectorNotFound => {
                AppError::NotFound("Classifier type selector not found".to_string())
            }
            ServiceError::Repository(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
