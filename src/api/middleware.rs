//! Request Middleware
//!
//! The three cross-cutting stages wrapped around the user routes, outermost
//! first:
//!
//! 1. error interception: panics and internal failures become a generic 500
//! 2. bearer token check: rejects requests without the accepted token
//! 3. access logging: one info line per request that reached the handlers
//!
//! Each stage is independent; [`super::RouterBuilder`] decides which ones
//! are installed.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::utils::error::{AppError, ErrorResponse};

/// Token accepted by [`auth_middleware`]
#[derive(Debug, Clone)]
pub struct AuthState {
    accepted_token: Arc<str>,
}

impl AuthState {
    pub fn new(accepted_token: impl Into<Arc<str>>) -> Self {
        Self {
            accepted_token: accepted_token.into(),
        }
    }

    fn accepts(&self, token: &str) -> bool {
        token == &*self.accepted_token
    }
}

/// Extracts the bearer token: the last whitespace-separated word of the
/// Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.split_whitespace().last())
}

/// Static token authentication
///
/// Short-circuits with 401 `{"error": "Unauthorized"}` when the token is
/// missing or differs from the accepted one; later stages never run.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match extract_bearer_token(request.headers()) {
        Some(token) if auth.accepts(token) => Ok(next.run(request).await),
        _ => Err(AppError::Unauthorized),
    }
}

/// Logs method, path and final status of every request it sees
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    log::info!("{} {} responded {}", method, path, response.status().as_u16());
    response
}

/// Turns a panic payload into the generic 500 response
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    log::error!("Unhandled panic while processing request: {}", detail);
    (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal()).into_response()
}

/// Outermost stage: catches panics from everything it wraps
///
/// Internal errors returned as [`AppError::Internal`] are already logged and
/// rendered generically by their `IntoResponse` impl, so only panics need
/// catching here.
pub fn error_handling_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}
