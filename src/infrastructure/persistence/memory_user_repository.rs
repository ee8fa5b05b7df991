//! In-memory implementation of the user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::domain::{StoreError, UserStore};

/// Shares a [`UserStore`] between concurrent requests.
///
/// Mutations hold the write lock for their whole duration, so id allocation
/// and the sequence/index update happen as one step. Reads take the read lock
/// and clone out what they return.
pub struct InMemoryUserRepository {
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Wraps an existing store.
    pub fn new(store: UserStore) -> Self {
        debug!(users = store.len(), "In-memory user store ready");
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(UserStore::new())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        self.store.read().await.list()
    }

    async fn find_by_id(&self, id: i64) -> Result<User, StoreError> {
        self.store.read().await.get(id)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.store.write().await.insert(new_user)
    }

    async fn update(&self, id: i64, new_user: NewUser) -> Result<User, StoreError> {
        self.store.write().await.update(id, new_user)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.store.write().await.remove(id).map(|_| ())
    }
}
