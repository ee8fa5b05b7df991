//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Request body types
//! - [`extract`] - Path and body extractors with service-specific rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Interceptor pipeline (error translation, auth, access log)
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
