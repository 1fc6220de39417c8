//! User Model
//!
//! Core user data structure.

use serde::{Deserialize, Serialize};

/// Identifier type for users; assigned by the store, never by clients
pub type UserId = i32;

/// User representation stored in memory and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: UserId,

    /// User's display name
    pub name: String,

    /// User's email address
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
