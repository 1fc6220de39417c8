//! User Directory Library
//!
//! A small in-memory user directory exposed over HTTP: paginated listing,
//! lookup, creation, update and deletion of users, behind an optional chain
//! of error-catching, bearer-token and access-logging middleware.
//!
//! # Quick Start
//!
//! ## As a Store
//!
//! ```rust
//! use user_directory::{UserRequest, UserStore};
//!
//! let store = UserStore::new();
//! let user = store
//!     .create(&UserRequest::new("Alice Smith", "alice@example.com"))
//!     .unwrap();
//!
//! assert_eq!(user.id, 1);
//! assert_eq!(store.get(1).unwrap().name, "Alice Smith");
//! ```
//!
//! ## As a Web Server Library
//!
//! ```rust,no_run
//! use user_directory::{
//!     api::{AppState, RouterBuilder},
//!     service::UserStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = RouterBuilder::with_all_routes()
//!         .with_error_handling()
//!         .with_auth("my-token")
//!         .with_request_logging()
//!         .build(AppState::new(UserStore::new()));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: handlers, middleware and the configurable router
//! - **Service Layer**: the user store and its validation rules
//! - **Models**: the user entity and request/response payloads
//! - **Utils**: email validation and error handling
//! - **Config**: environment-driven settings read once at startup

/// HTTP API layer with handlers, middleware and configurable routing
pub mod api;

/// Configuration management for server, API and middleware settings
pub mod config;

/// Data models and request/response structures
pub mod models;

/// In-memory user store
pub mod service;

/// Shared utilities for validation and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, AppState, RouterBuilder};
pub use config::{AppConfig, ApiConfig, MiddlewareConfig, ServerConfig};
pub use models::{
    requests::{HealthCheckResponse, ListUsersQuery, UserRequest},
    user::{User, UserId},
};
pub use service::{UserStore, UserStoreError, DEFAULT_PAGE_SIZE};
pub use utils::error::{AppError, AppResult, ErrorResponse};
pub use utils::validation::is_valid_email;

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
