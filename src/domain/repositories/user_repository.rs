//! Repository trait for user persistence.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access contract for the `users` table.
///
/// Each method issues exactly one SQL statement. Update and delete do not
/// check affected rows, so targeting a missing id succeeds silently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on datastore errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Inserts a user and returns it with the assigned id.
    ///
    /// Name emptiness is not checked here; callers validate input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on constraint violations or connectivity failures.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Overwrites the mutable fields of the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on datastore errors.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<(), AppError>;

    /// Permanently removes the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on datastore errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Returns up to `count` users in id order, skipping the first `start`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on datastore errors.
    async fn list(&self, start: i64, count: i64) -> Result<Vec<User>, AppError>;

    /// Round-trips a trivial query to confirm the datastore is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
