//! API Route Definitions
//!
//! This module defines all HTTP routes and their corresponding handlers using a flexible
//! builder pattern. The RouterBuilder allows selective enabling/disabling of API endpoints
//! and of each middleware stage, so the same handlers can run behind the full middleware
//! chain, part of it, or none at all.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::*;
use super::middleware::{
    auth_middleware, error_handling_layer, request_logging_middleware, AuthState,
};
use crate::config::MiddlewareConfig;

/// Builder for creating API routes with configurable endpoints and middleware
#[derive(Default)]
pub struct RouterBuilder {
    /// Whether to enable the greeting endpoint (GET /)
    root: bool,
    /// Whether to enable the health check endpoint (GET /health)
    health_check: bool,
    /// Whether to enable user listing endpoint (GET /users)
    list_users: bool,
    /// Whether to enable user creation endpoint (POST /users)
    create_user: bool,
    /// Whether to enable user retrieval endpoint (GET /users/{id})
    get_user: bool,
    /// Whether to enable user update endpoint (PUT /users/{id})
    update_user: bool,
    /// Whether to enable user removal endpoint (DELETE /users/{id})
    delete_user: bool,
    /// Whether panics are converted into a generic 500 response
    error_handling: bool,
    /// Whether every request that reaches the routes is logged
    request_logging: bool,
    /// Token required in the Authorization header, if authentication is on
    auth: Option<AuthState>,
}

impl RouterBuilder {
    /// Creates a new router builder with all routes and middleware disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with every route enabled
    ///
    /// Middleware stays off until configured with [`Self::with_error_handling`],
    /// [`Self::with_auth`], [`Self::with_request_logging`] or
    /// [`Self::with_middleware`].
    pub fn with_all_routes() -> Self {
        Self {
            root: true,
            health_check: true,
            list_users: true,
            create_user: true,
            get_user: true,
            update_user: true,
            delete_user: true,
            ..Self::default()
        }
    }

    /// Creates a router with only the read endpoints
    ///
    /// Good for user directories that are populated elsewhere.
    pub fn with_readonly_routes() -> Self {
        Self {
            root: true,
            health_check: true,
            list_users: true,
            get_user: true,
            ..Self::default()
        }
    }

    /// Creates a router with minimal routes for monitoring
    pub fn with_minimal_routes() -> Self {
        Self {
            health_check: true,
            ..Self::default()
        }
    }

    /// Enables or disables the greeting endpoint (GET /)
    pub fn root(mut self, enabled: bool) -> Self {
        self.root = enabled;
        self
    }

    /// Enables or disables the health check endpoint (GET /health)
    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    /// Enables or disables the user listing endpoint (GET /users)
    pub fn list_users(mut self, enabled: bool) -> Self {
        self.list_users = enabled;
        self
    }

    /// Enables or disables the user creation endpoint (POST /users)
    pub fn create_user(mut self, enabled: bool) -> Self {
        self.create_user = enabled;
        self
    }

    /// Enables or disables the user retrieval endpoint (GET /users/{id})
    pub fn get_user(mut self, enabled: bool) -> Self {
        self.get_user = enabled;
        self
    }

    /// Enables or disables the user update endpoint (PUT /users/{id})
    pub fn update_user(mut self, enabled: bool) -> Self {
        self.update_user = enabled;
        self
    }

    /// Enables or disables the user removal endpoint (DELETE /users/{id})
    pub fn delete_user(mut self, enabled: bool) -> Self {
        self.delete_user = enabled;
        self
    }

    /// Installs the error interception stage
    pub fn with_error_handling(mut self) -> Self {
        self.error_handling = true;
        self
    }

    /// Requires `token` as the bearer token on every request
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthState::new(token.into()));
        self
    }

    /// Installs the access logging stage
    pub fn with_request_logging(mut self) -> Self {
        self.request_logging = true;
        self
    }

    /// Applies a middleware configuration; `token` is used when
    /// authentication is enabled
    pub fn with_middleware(mut self, config: MiddlewareConfig, token: &str) -> Self {
        self.error_handling = config.error_handling;
        self.request_logging = config.request_logging;
        self.auth = config.authentication.then(|| AuthState::new(token));
        self
    }

    /// Builds the Axum router with the configured routes and middleware
    ///
    /// Layers are applied innermost first so requests pass through error
    /// interception, then authentication, then logging. A rejected token
    /// therefore never produces an access log line.
    pub fn build(self, state: AppState) -> Router {
        let mut router = Router::new();

        if self.root {
            router = router.route("/", get(root));
        }

        if self.health_check {
            router = router.route("/health", get(health_check));
        }

        if self.list_users {
            router = router.route("/users", get(list_users));
        }

        if self.create_user {
            router = router.route("/users", post(create_user));
        }

        if self.get_user {
            router = router.route("/users/{id}", get(get_user));
        }

        if self.update_user {
            router = router.route("/users/{id}", put(update_user));
        }

        if self.delete_user {
            router = router.route("/users/{id}", delete(delete_user));
        }

        if self.request_logging {
            router = router.layer(from_fn(request_logging_middleware));
        }

        if let Some(auth) = self.auth {
            router = router.layer(from_fn_with_state(auth, auth_middleware));
        }

        if self.error_handling {
            router = router.layer(error_handling_layer());
        }

        router.with_state(state)
    }
}

/// Creates all API routes behind the full middleware chain
pub fn create_routes(state: AppState, token: &str) -> Router {
    RouterBuilder::with_all_routes()
        .with_middleware(MiddlewareConfig::full(), token)
        .build(state)
}
