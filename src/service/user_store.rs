//! User Store Implementation
//!
//! The authoritative in-memory collection of users and the business rules
//! around it: validation, id assignment and pagination.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::models::{
    requests::UserRequest,
    user::{User, UserId},
};
use crate::utils::error::AppError;

/// Page size used when a list request does not specify one
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Custom error types for the user store
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserStoreError {
    /// User with the specified identifier was not found
    #[error("User with ID {0} not found.")]
    UserNotFound(UserId),

    /// Input validation failed; the message is safe to show to clients
    #[error("{0}")]
    ValidationError(&'static str),

    /// A writer panicked while holding the lock
    #[error("User store lock poisoned")]
    LockPoisoned,
}

impl From<UserStoreError> for AppError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::UserNotFound(_) => AppError::NotFound(err.to_string()),
            UserStoreError::ValidationError(msg) => AppError::Validation(msg.to_string()),
            UserStoreError::LockPoisoned => AppError::Internal(err.to_string()),
        }
    }
}

impl<T> From<PoisonError<T>> for UserStoreError {
    fn from(_: PoisonError<T>) -> Self {
        UserStoreError::LockPoisoned
    }
}

/// Result type for user store operations
pub type UserStoreResult<T> = Result<T, UserStoreError>;

/// Insertion-ordered user collection shared across requests
///
/// Writers (create, update, delete) hold the write lock for the whole
/// mutation; readers take the read lock and always see a consistent list.
/// Validation runs before any lock is taken.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
    default_page_size: i32,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Creates an empty store with the default page size
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty store with a custom default page size
    pub fn with_page_size(default_page_size: i32) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            default_page_size,
        }
    }

    /// Replaces the contents with already-identified users, keeping their order
    pub fn seeded(mut self, users: Vec<User>) -> Self {
        self.users = RwLock::new(users);
        self
    }

    /// Page size used when a list request omits one
    pub fn default_page_size(&self) -> i32 {
        self.default_page_size
    }

    fn read(&self) -> UserStoreResult<RwLockReadGuard<'_, Vec<User>>> {
        Ok(self.users.read()?)
    }

    fn write(&self) -> UserStoreResult<RwLockWriteGuard<'_, Vec<User>>> {
        Ok(self.users.write()?)
    }

    /// Returns one page of users in insertion order
    ///
    /// Skips `(page - 1) * page_size` users and takes `page_size`. Neither
    /// value is validated: a negative skip counts as zero and a non-positive
    /// page size yields an empty page.
    pub fn list(&self, page: Option<i32>, page_size: Option<i32>) -> UserStoreResult<Vec<User>> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(self.default_page_size);

        let skip = (i64::from(page) - 1) * i64::from(page_size);
        let skip = usize::try_from(skip.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size.max(0)).unwrap_or(0);

        let users = self.read()?;
        Ok(users.iter().skip(skip).take(take).cloned().collect())
    }

    /// Looks up a user by id
    pub fn get(&self, id: UserId) -> UserStoreResult<User> {
        self.read()?
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound(id))
    }

    /// Validates and appends a new user, assigning `max(id) + 1` (or 1)
    pub fn create(&self, request: &UserRequest) -> UserStoreResult<User> {
        let (name, email) = request
            .validated()
            .map_err(UserStoreError::ValidationError)?;

        let mut users = self.write()?;
        let id = users.iter().map(|user| user.id).max().map_or(1, |max| max + 1);
        let user = User::new(id, name, email);
        users.push(user.clone());

        log::debug!("Created user {}", id);
        Ok(user)
    }

    /// Validates and replaces the name and email of an existing user
    pub fn update(&self, id: UserId, request: &UserRequest) -> UserStoreResult<User> {
        let (name, email) = request
            .validated()
            .map_err(UserStoreError::ValidationError)?;

        let mut users = self.write()?;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(UserStoreError::UserNotFound(id))?;

        user.name = name.to_string();
        user.email = email.to_string();
        Ok(user.clone())
    }

    /// Removes a user by id
    pub fn delete(&self, id: UserId) -> UserStoreResult<()> {
        let mut users = self.write()?;
        let position = users
            .iter()
            .position(|user| user.id == id)
            .ok_or(UserStoreError::UserNotFound(id))?;

        users.remove(position);
        log::debug!("Deleted user {}", id);
        Ok(())
    }

    /// Number of stored users, reported by the health check
    pub fn len(&self) -> UserStoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// True when no users are stored
    pub fn is_empty(&self) -> UserStoreResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::messages;
    use std::sync::Arc;

    fn seeded_store(count: i32) -> UserStore {
        let users = (1..=count)
            .map(|i| User::new(i, format!("User {}", i), format!("user{}@example.com", i)))
            .collect();
        UserStore::new().seeded(users)
    }

    fn ids(users: &[User]) -> Vec<UserId> {
        users.iter().map(|user| user.id).collect()
    }

    #[test]
    fn test_create_then_get() {
        let store = UserStore::new();
        let created = store
            .create(&UserRequest::new("John Doe", "john.doe@example.com"))
            .unwrap();

        assert_eq!(created.id, 1);
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.name, "John Doe");
        assert_eq!(fetched.email, "john.doe@example.com");
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = UserStore::new();
        let first = store.create(&UserRequest::new("A", "a@example.com")).unwrap();
        let second = store.create(&UserRequest::new("B", "b@example.com")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let store = UserStore::new();
        assert_eq!(
            store.create(&UserRequest::new(" ", "a@example.com")),
            Err(UserStoreError::ValidationError(messages::FIELDS_REQUIRED))
        );
        assert_eq!(
            store.create(&UserRequest::new("A", "not-an-email")),
            Err(UserStoreError::ValidationError(messages::INVALID_EMAIL))
        );
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_deleting_max_id_reuses_it() {
        let store = seeded_store(5);
        store.delete(5).unwrap();

        let created = store.create(&UserRequest::new("X", "x@x.com")).unwrap();
        assert_eq!(created.id, 5);
    }

    #[test]
    fn test_deleting_lower_id_keeps_numbering() {
        let store = seeded_store(5);
        store.delete(2).unwrap();

        let created = store.create(&UserRequest::new("X", "x@x.com")).unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn test_list_defaults() {
        let store = seeded_store(12);
        let page = store.list(None, None).unwrap();
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_list_second_page() {
        let store = seeded_store(5);
        let page = store.list(Some(2), Some(2)).unwrap();
        assert_eq!(ids(&page), vec![3, 4]);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let store = UserStore::new().seeded(vec![
            User::new(7, "Seven", "seven@example.com"),
            User::new(2, "Two", "two@example.com"),
        ]);
        store.create(&UserRequest::new("Eight", "eight@example.com")).unwrap();

        let page = store.list(None, None).unwrap();
        assert_eq!(ids(&page), vec![7, 2, 8]);
    }

    #[test]
    fn test_list_permissive_arguments() {
        let store = seeded_store(5);
        assert_eq!(ids(&store.list(Some(0), Some(2)).unwrap()), vec![1, 2]);
        assert_eq!(ids(&store.list(Some(-3), Some(2)).unwrap()), vec![1, 2]);
        assert!(store.list(Some(1), Some(0)).unwrap().is_empty());
        assert!(store.list(Some(1), Some(-4)).unwrap().is_empty());
        assert!(store.list(Some(4), Some(2)).unwrap().is_empty());
        assert!(store.list(Some(i32::MAX), Some(i32::MAX)).unwrap().is_empty());
    }

    #[test]
    fn test_custom_default_page_size() {
        let store = UserStore::with_page_size(3).seeded(seeded_store(5).list(None, None).unwrap());
        assert_eq!(store.default_page_size(), 3);
        assert_eq!(ids(&store.list(Some(2), None).unwrap()), vec![4, 5]);
    }

    #[test]
    fn test_get_missing() {
        let store = seeded_store(2);
        assert_eq!(store.get(9), Err(UserStoreError::UserNotFound(9)));
    }

    #[test]
    fn test_delete_missing_leaves_store_unchanged() {
        let store = seeded_store(3);
        let before = store.list(None, None).unwrap();

        assert_eq!(store.delete(42), Err(UserStoreError::UserNotFound(42)));
        assert_eq!(store.list(None, None).unwrap(), before);
    }

    #[test]
    fn test_update_in_place() {
        let store = seeded_store(3);
        let updated = store
            .update(2, &UserRequest::new("Renamed", "renamed@example.com"))
            .unwrap();

        assert_eq!(updated, User::new(2, "Renamed", "renamed@example.com"));
        assert_eq!(ids(&store.list(None, None).unwrap()), vec![1, 2, 3]);
        assert_eq!(store.get(2).unwrap(), updated);
    }

    #[test]
    fn test_update_blank_name_leaves_record_unchanged() {
        let store = seeded_store(1);
        let before = store.get(1).unwrap();

        let result = store.update(1, &UserRequest::new("", "new@example.com"));
        assert_eq!(
            result,
            Err(UserStoreError::ValidationError(messages::FIELDS_REQUIRED))
        );
        assert_eq!(store.get(1).unwrap(), before);
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let store = UserStore::new();
        assert_eq!(
            store.update(1, &UserRequest::new("A", "bad")),
            Err(UserStoreError::ValidationError(messages::INVALID_EMAIL))
        );
        assert_eq!(
            store.update(1, &UserRequest::new("A", "a@b.com")),
            Err(UserStoreError::UserNotFound(1))
        );
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(UserStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        let request = UserRequest::new(
                            format!("User {}-{}", t, i),
                            format!("user{}.{}@example.com", t, i),
                        );
                        store.create(&request).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut all = ids(&store.list(Some(1), Some(1000)).unwrap());
        assert_eq!(all.len(), 200);
        all.sort_unstable();
        assert_eq!(all, (1..=200).collect::<Vec<_>>());
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = Arc::new(seeded_store(1));
        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.users.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.get(1), Err(UserStoreError::LockPoisoned));
        let app_error: AppError = UserStoreError::LockPoisoned.into();
        assert!(matches!(app_error, AppError::Internal(_)));
    }
}
