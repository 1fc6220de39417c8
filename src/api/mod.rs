//! API Layer
//!
//! HTTP API endpoints, middleware and request handling for the user directory.

pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use handlers::AppState;
pub use middleware::{
    auth_middleware, error_handling_layer, extract_bearer_token, request_logging_middleware,
    AuthState,
};
pub use routes::{create_routes, RouterBuilder};
