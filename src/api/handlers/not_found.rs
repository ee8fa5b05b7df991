//! Fallback for requests that match no route.

use serde_json::json;

use crate::error::AppError;

/// The generic not-found error shared by the fallback and the id extractor.
pub fn route_not_found() -> AppError {
    AppError::not_found("Route not found", json!({}))
}

/// Answers any unmatched method/path with 404.
pub async fn not_found_handler() -> AppError {
    route_not_found()
}
