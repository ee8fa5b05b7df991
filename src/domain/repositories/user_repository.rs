//! Repository trait for user records.

use crate::domain::StoreError;
use crate::domain::entities::{NewUser, User};
use async_trait::async_trait;

/// Shared access to the user collection.
///
/// Implementations must make every operation atomic with respect to the
/// others: concurrent inserts never share an id and a read never observes a
/// half-applied mutation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - lock-guarded [`crate::domain::UserStore`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns all users in insertion order.
    async fn list(&self) -> Vec<User>;

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    async fn find_by_id(&self, id: i64) -> Result<User, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the candidate is invalid.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    /// Returns [`StoreError::Validation`] if the candidate is invalid.
    async fn update(&self, id: i64, new_user: NewUser) -> Result<User, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
