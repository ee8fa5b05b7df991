//! Data Transfer Objects for API requests and responses.
//!
//! Responses serialize domain entities directly; only request bodies need
//! their own types.

pub mod user;
