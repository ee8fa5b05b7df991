//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` for service tests.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
