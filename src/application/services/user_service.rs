//! User management service.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, USER_NOT_FOUND};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Service wrapping the user repository.
///
/// Every repository call is bounded by `deadline`; a call that outlives it
/// fails with [`AppError::Timeout`] and its future is dropped.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    deadline: Duration,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>, deadline: Duration) -> Self {
        Self {
            repository,
            deadline,
        }
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches.
    /// Returns [`AppError::Database`] on datastore errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.with_deadline(self.repository.find_by_id(id))
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    /// Creates a user and returns it with its assigned id.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        self.with_deadline(self.repository.create(new_user)).await
    }

    /// Applies an update. A missing id is not an error.
    pub async fn update_user(&self, id: i64, update: UserUpdate) -> Result<(), AppError> {
        self.with_deadline(self.repository.update(id, update)).await
    }

    /// Deletes a user. A missing id is not an error.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.with_deadline(self.repository.delete(id)).await
    }

    /// Lists users in id order. Callers pass already clamped bounds.
    pub async fn list_users(&self, start: i64, count: i64) -> Result<Vec<User>, AppError> {
        self.with_deadline(self.repository.list(start, count)).await
    }

    /// Checks datastore connectivity.
    pub async fn check_datastore(&self) -> Result<(), AppError> {
        self.with_deadline(self.repository.ping()).await
    }

    async fn with_deadline<T, F>(&self, operation: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        tokio::time::timeout(self.deadline, operation)
            .await
            .map_err(|_| AppError::Timeout)?
    }
}
