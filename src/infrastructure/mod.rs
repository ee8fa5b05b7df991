//! Infrastructure layer.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
