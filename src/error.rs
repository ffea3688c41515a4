// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Every failure is scoped to a single request; none of them is fatal to the process.
#[derive(Debug)]
pub enum AppError {
    // 409 Conflict: a teacher account with this email already exists
    DuplicateEmail(String),

    // 404 Not Found (teacher or quiz addressed by id)
    NotFound(String),

    // 403 Forbidden: actor is neither the owner nor the administrator
    PermissionDenied(String),

    // 404 Not Found: submission targets a quiz that does not exist
    UnknownQuiz(String),

    // 422 Unprocessable Entity: picks or answer key do not fit the quiz shape
    InvalidShape(String),

    // 500 Internal Server Error: the underlying store failed
    StorageFailure(String),

    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    AuthError(String),

    // 409 Conflict: retryable, e.g. code generation kept colliding
    Conflict(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
/// Storage details are logged, never sent to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::StorageFailure(msg) => {
                tracing::error!("Storage failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::DuplicateEmail(msg) => (StatusCode::CONFLICT, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::PermissionDenied(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::UnknownQuiz(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidShape(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::StorageFailure`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StorageFailure(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// True when the database rejected a write because of a UNIQUE constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// True when the database rejected a write because a referenced row is gone.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_foreign_key_violation(),
        _ => false,
    }
}
