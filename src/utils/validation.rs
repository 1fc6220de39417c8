//! Validation Utilities
//!
//! Input validation functions for user data and API requests.

use lettre::message::Mailbox;
use validator::ValidationError;

/// Validation code for a missing or whitespace-only field
pub const BLANK_CODE: &str = "blank";

/// Validation code for a malformed email address
pub const INVALID_EMAIL_CODE: &str = "invalid_email";

/// Validates an email address
///
/// The input must parse as a mailbox and the parsed address must equal the
/// input exactly, so surrounding whitespace, display names, comments and
/// other tokens the parser would skip make the address invalid.
pub fn is_valid_email(email: &str) -> bool {
    email
        .parse::<Mailbox>()
        .map(|mailbox| mailbox.email.to_string() == email)
        .unwrap_or(false)
}

/// Returns true when the value has at least one non-whitespace character
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Custom validator rejecting whitespace-only strings
pub fn not_blank_validator(value: &str) -> Result<(), ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(ValidationError::new(BLANK_CODE))
    }
}

/// Custom validator for email fields using the validator crate
///
/// A blank email is reported as missing rather than malformed.
pub fn email_validator(email: &str) -> Result<(), ValidationError> {
    if !is_present(email) {
        Err(ValidationError::new(BLANK_CODE))
    } else if !is_valid_email(email) {
        Err(ValidationError::new(INVALID_EMAIL_CODE))
    } else {
        Ok(())
    }
}

/// Validation error messages for user-friendly responses
pub mod messages {
    pub const FIELDS_REQUIRED: &str = "Name and Email are required.";
    pub const INVALID_EMAIL: &str = "Invalid email format.";
}
