//! Data Models Module
//!
//! This module contains the data structures used throughout the user
//! directory: the user entity and the request/response payloads.

pub mod requests;
pub mod user;

// Re-export commonly used types
pub use requests::*;
pub use user::*;
