//! Application layer services.
//!
//! Services consume repository traits and translate domain outcomes into
//! [`crate::error::AppError`] for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User directory CRUD

pub mod services;
