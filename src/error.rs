//! # Error Handling
//!
//! Application error type and its conversion into HTTP responses.
//!
//! Two body shapes reach clients:
//! - validation failures: `{ "errors": [{ "field": ..., "message": ... }] }`
//! - everything else: `{ "error": "..." }`

use crate::validation::FieldErrors;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
///
/// Handlers and the controller return `AppResult<T>`; `?` converts library
/// errors through the `#[from]` variants.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database errors (SQLx library errors)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt hashing or verification failed (not a password mismatch)
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// One or more request fields broke their validation rules (400)
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// Request body could not be decoded as the expected JSON (400)
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// Resource not found errors (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Authentication errors (401)
    ///
    /// Used for bad credentials and for requests without a session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server errors (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response
///
/// Internal details are logged and replaced by a generic message; client
/// errors carry their message verbatim.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(errors) => {
                // Field errors use their own body shape
                return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response();
            }
            AppError::Database(e) => {
                // Don't leak database internals
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::PasswordHash(e) => {
                tracing::error!("Password hashing error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::MalformedBody(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

/// Convenience alias: `AppResult<User>` instead of `Result<User, AppError>`
pub type AppResult<T> = Result<T, AppError>;
