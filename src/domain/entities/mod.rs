//! Core domain entities.
//!
//! - [`User`] - A stored directory entry
//! - [`NewUser`] - Candidate data for create and update

pub mod user;

pub use user::{NewUser, User};
