//! Application error type and its HTTP representation.
//!
//! Handlers and services return [`AppError`]; axum turns it into a response via
//! [`IntoResponse`]. Client errors (400/404) carry a structured envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "User not found", "details": { "id": 7 } } }
//! ```
//!
//! Internal errors never expose their message. They are rendered as a bare 500
//! tagged with an [`InternalFault`] extension. The error translation stage
//! replaces every 5xx with the fixed public body and logs the tag's message
//! alongside it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Marker placed in response extensions when a request failed unexpectedly.
///
/// Holds the original message for server-side logging only.
#[derive(Debug, Clone)]
pub struct InternalFault(pub String);

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    /// Reports an unexpected failure from a handler or service.
    ///
    /// The message reaches the server log only; clients see the generic 500.
    /// No current store operation can fail this way, so nothing in the
    /// request path builds it yet.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => {
                AppError::not_found("User not found", serde_json::json!({ "id": id }))
            }
            StoreError::Validation { field } => AppError::bad_request(
                StoreError::VALIDATION_MESSAGE,
                serde_json::json!({ "field": field }),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message } => {
                let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
                response.extensions_mut().insert(InternalFault(message));
                return response;
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::bad_request("bad", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::not_found("missing", json!({"id": 1})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_is_tagged_and_has_no_message() {
        let response = AppError::internal("db exploded").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let fault = response.extensions().get::<InternalFault>().unwrap();
        assert_eq!(fault.0, "db exploded");
    }

    #[test]
    fn test_store_error_conversion() {
        let err: AppError = StoreError::NotFound(42).into();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err: AppError = StoreError::Validation { field: "email" }.into();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
