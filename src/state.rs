//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

impl AppState {
    /// Builds state around an already populated repository.
    pub fn new(repository: Arc<InMemoryUserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
