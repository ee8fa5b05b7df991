//! Outermost stage: turns unexpected failures into a generic 500.
//!
//! Two kinds of fault are caught:
//!
//! - a panic unwinding out of any later stage or handler
//! - any 5xx response, whatever produced it (axum's own serialization
//!   failures included). When the response carries an [`InternalFault`] tag
//!   (an [`crate::error::AppError::Internal`] returned by a handler), its
//!   message is added to the log record.
//!
//! Both are logged and replaced with:
//!
//! ```text
//! HTTP/1.1 500 Internal Server Error
//! content-type: application/json
//!
//! {"error":"Internal server error."}
//! ```
//!
//! Expected failures (400, 401, 404) pass through untouched.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;
use serde_json::json;
use tracing::error;

use super::pipeline::Interceptor;
use crate::error::InternalFault;

/// Public message for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Catches faults from the rest of the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ErrorTranslation;

impl ErrorTranslation {
    pub fn new() -> Self {
        Self
    }
}

/// The fixed body returned for any unexpected failure.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

#[async_trait]
impl Interceptor for ErrorTranslation {
    fn name(&self) -> &'static str {
        "error_translation"
    }

    async fn intercept(&self, request: Request, next: Next) -> Response {
        let method = request.method().clone();
        let path = request.uri().path().to_owned();

        match AssertUnwindSafe(next.run(request)).catch_unwind().await {
            Ok(response) if response.status().is_server_error() => {
                let fault = response
                    .extensions()
                    .get::<InternalFault>()
                    .map_or("untagged server error", |InternalFault(fault)| fault.as_str());
                error!(
                    %method,
                    %path,
                    status = response.status().as_u16(),
                    fault,
                    "Unhandled error while processing request"
                );
                internal_error_response()
            }
            Ok(response) => response,
            Err(payload) => {
                error!(
                    %method,
                    %path,
                    panic = panic_message(payload.as_ref()),
                    "Panic while processing request"
                );
                internal_error_response()
            }
        }
    }
}
