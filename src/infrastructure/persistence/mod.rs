//! Repository implementations.
//!
//! - [`InMemoryUserRepository`] - Lock-guarded in-memory user store
//!
//! Nothing is persisted across restarts.

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
