//! Service Layer
//!
//! Business logic for user management.

pub mod user_store;

pub use user_store::{UserStore, UserStoreError, UserStoreResult, DEFAULT_PAGE_SIZE};
