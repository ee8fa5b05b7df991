//! User directory service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for reading and mutating the user directory.
///
/// Store outcomes (validation, not found) are translated into [`AppError`]
/// here so handlers only decide on success status codes.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users in insertion order.
    pub async fn list_users(&self) -> Vec<User> {
        self.repository.list().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Creates a user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or the email is
    /// malformed.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        info!(id = user.id, "User created");
        Ok(user)
    }

    /// Replaces name and email of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Validation`] if the candidate is invalid.
    pub async fn update_user(&self, id: i64, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.update(id, new_user).await?;
        debug!(id, "User updated");
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        info!(id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreError;
    use crate::domain::repositories::MockUserRepository;

    fn user(id: i64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![
            user(1, "John Doe", "john.doe@example.com"),
            user(2, "Jane Smith", "jane.smith@example.com"),
        ];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || users.clone());

        let service = UserService::new(Arc::new(mock_repo));

        let list = service.list_users().await;
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "Jane Smith");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|id| Err(StoreError::NotFound(id)));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user(7).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|candidate| candidate.name == "Ada")
            .times(1)
            .returning(|candidate| Ok(user(3, &candidate.name, &candidate.email)));

        let service = UserService::new(Arc::new(mock_repo));

        let created = service
            .create_user(NewUser::new("Ada", "ada@x.io"))
            .await
            .unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.email, "ada@x.io");
    }

    #[tokio::test]
    async fn test_create_user_validation_error() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(StoreError::Validation { field: "email" }));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.create_user(NewUser::new("Ada", "nope")).await;
        match result.unwrap_err() {
            AppError::Validation { message, .. } => {
                assert_eq!(message, StoreError::VALIDATION_MESSAGE)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|id, _| Err(StoreError::NotFound(id)));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .update_user(99, NewUser::new("Ada", "ada@x.io"))
            .await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete_user(1).await.is_ok());
    }
}
