//! Error Handling Utilities
//!
//! HTTP-facing error type shared by handlers and middleware.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Body sent for every 500 response, whatever the underlying cause
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Body sent when the bearer token check fails
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Main application error type returned from handlers and middleware
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or rejected bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Resource not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Generic internal server errors; the message is logged, never returned
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Standard error response structure for API endpoints
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }

    /// The generic 500 body
    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(&msg)).into_response()
            }
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::new(UNAUTHORIZED_MESSAGE)).into_response()
            }
            AppError::NotFound(msg) => {
                log::warn!("{}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Internal(cause) => {
                log::error!("Unhandled error while processing request: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal()).into_response()
            }
        }
    }
}

/// Result type alias for operations that can return AppError
pub type AppResult<T> = Result<T, AppError>;

/// Unreadable JSON bodies are client errors and share the 400 shape
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}
