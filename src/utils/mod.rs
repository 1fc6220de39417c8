//! Utilities Module
//!
//! Shared utilities for error handling and input validation used throughout
//! the user directory.

pub mod error;
pub mod validation;

// Re-export commonly used utilities
pub use error::{AppError, AppResult, ErrorResponse};
pub use validation::*;
