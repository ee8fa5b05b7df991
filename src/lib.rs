//! # User Directory
//!
//! A small user directory service built with Axum: CRUD over an in-memory
//! collection of users, behind a fixed interceptor pipeline that translates
//! unexpected failures, enforces a shared bearer secret and logs traffic.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - User entity, the indexed store, repository trait
//! - **Application Layer** ([`application`]) - Service translating store outcomes
//! - **Infrastructure Layer** ([`infrastructure`]) - Lock-guarded in-memory repository
//! - **API Layer** ([`api`]) - Handlers, extractors and the interceptor pipeline
//!
//! ## Request Flow
//!
//! ```text
//! ErrorTranslation → BearerAuth → AccessLog → Router → handler → UserStore
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export API_TOKEN="give-me-access"
//! cargo run
//!
//! curl -H "Authorization: Bearer give-me-access" http://localhost:3000/users
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for integration tests.
pub mod prelude {
    pub use crate::api::middleware::{Interceptor, Pipeline};
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, User};
    pub use crate::domain::{StoreError, UserStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
