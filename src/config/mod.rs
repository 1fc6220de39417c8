//! Configuration Module
//!
//! Centralized configuration for the user directory: server binding,
//! pagination defaults, and which middleware stages are active.
//!
//! Everything is read once at startup and treated as immutable afterwards.

use crate::service::DEFAULT_PAGE_SIZE;

/// Token accepted by the auth stage when `API_TOKEN` is not set
pub const DEFAULT_API_TOKEN: &str = "secret-token";

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as boolean with default
    pub fn get_bool(key: &str, default: bool) -> bool {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as i32 with default
    pub fn get_i32(key: &str, default: i32) -> i32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Check if environment variable is set
    pub fn is_set(key: &str) -> bool {
        env::var(key).is_ok()
    }
}

/// Application configuration combining all settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Pagination and authentication settings for the user API
    pub api: ApiConfig,

    /// Middleware stages to install
    pub middleware: MiddlewareConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// User API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Page size used when `pageSize` is omitted
    pub default_page_size: i32,
    /// The single bearer token accepted by the auth stage
    pub api_token: String,
}

/// Middleware chain configuration; any subset of stages may be enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddlewareConfig {
    pub error_handling: bool,
    pub authentication: bool,
    pub request_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env::get_string("SERVER_HOST", "0.0.0.0"),
            port: env::get_u16("SERVER_PORT", 3000),
            log_level: env::get_string("LOG_LEVEL", "info"),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: env::get_i32("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            api_token: env::get_string("API_TOKEN", DEFAULT_API_TOKEN),
        }
    }
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            error_handling: env::get_bool("ENABLE_ERROR_HANDLING", true),
            authentication: env::get_bool("ENABLE_AUTH", true),
            request_logging: env::get_bool("ENABLE_REQUEST_LOGGING", true),
        }
    }
}

impl MiddlewareConfig {
    /// All three stages
    pub fn full() -> Self {
        Self {
            error_handling: true,
            authentication: true,
            request_logging: true,
        }
    }

    /// No middleware at all
    pub fn none() -> Self {
        Self {
            error_handling: false,
            authentication: false,
            request_logging: false,
        }
    }
}

impl AppConfig {
    /// Load complete application configuration from environment
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            server: ServerConfig::default(),
            api: ApiConfig::default(),
            middleware: MiddlewareConfig::default(),
        })
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".into());
        }

        if self.api.default_page_size <= 0 {
            return Err("Default page size must be greater than 0".into());
        }

        if self.middleware.authentication && self.api.api_token.trim().is_empty() {
            return Err("API token cannot be empty when authentication is enabled".into());
        }

        if self.middleware.authentication && !env::is_set("API_TOKEN") {
            log::warn!("API_TOKEN not set, accepting the built-in default token");
        }

        Ok(())
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
