//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/users`, `/users/{id}` - User directory (Bearer token required)
//! - anything else           - 404 (still behind authentication)
//!
//! # Request Pipeline
//!
//! ```text
//! ErrorTranslation → BearerAuth → AccessLog → Router → handler
//! ```
//!
//! The pipeline wraps the whole router, fallback included, so unknown routes
//! are authenticated and logged like known ones. Trailing slashes are trimmed
//! before routing.

use crate::api;
use crate::api::middleware::Pipeline;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// The API router with the interceptor pipeline applied.
pub fn api_router(state: AppState, pipeline: &Pipeline) -> Router {
    pipeline.wrap(api::routes::user_routes().with_state(state))
}

/// Constructs the application service served by [`crate::server::run`].
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `pipeline` - interceptors wrapped around every route
pub fn app_router(state: AppState, pipeline: &Pipeline) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state, pipeline))
}
