//! Request and Response Models
//!
//! Data structures for API request and response payloads with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::utils::validation::{email_validator, messages, not_blank_validator, BLANK_CODE};

/// Request payload for creating or updating a user
///
/// Any `id` in the body is ignored: ids are assigned on create and taken
/// from the path on update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserRequest {
    /// User's display name (must contain a non-whitespace character)
    #[serde(default, alias = "Name")]
    #[validate(required(code = "blank"), custom(function = "not_blank_validator"))]
    pub name: Option<String>,

    /// User's email address (must be present and well formed)
    #[serde(default, alias = "Email")]
    #[validate(required(code = "blank"), custom(function = "email_validator"))]
    pub email: Option<String>,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Validates the request and returns the name and email on success
    ///
    /// The error is the client-facing message: missing fields take
    /// precedence over a malformed email.
    pub fn validated(&self) -> Result<(&str, &str), &'static str> {
        self.validate().map_err(|e| validation_message(&e))?;

        match (self.name.as_deref(), self.email.as_deref()) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(messages::FIELDS_REQUIRED),
        }
    }
}

/// Collapses field errors into the single message reported to clients
pub fn validation_message(errors: &ValidationErrors) -> &'static str {
    let missing = errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .any(|error| error.code == BLANK_CODE);

    if missing {
        messages::FIELDS_REQUIRED
    } else {
        messages::INVALID_EMAIL
    }
}

/// Query string for paginated listing
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListUsersQuery {
    /// 1-based page number (defaults to 1)
    pub page: Option<i32>,

    /// Number of users per page (defaults to the configured page size)
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: Option<i32>,
}

/// Response for health check
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub users: usize,
}
