//! Request extractors whose rejections go through [`AppError`].
//!
//! axum's stock `Path` and `Json` reject with plain-text bodies and their own
//! status codes. These wrappers keep every client error in the service's
//! envelope and pin the status codes:
//!
//! - a non-integer `{id}` segment is a **404**, the same as an unknown route
//! - an unparsable or incomplete JSON body is a **400**

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::handlers::route_not_found;
use crate::domain::StoreError;
use crate::error::AppError;

/// Integer user id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| route_not_found())?;

        raw.parse().map(UserId).map_err(|_| route_not_found())
    }
}

/// JSON request body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(
                    StoreError::VALIDATION_MESSAGE,
                    json!({ "reason": rejection.body_text() }),
                )
            })?;

        Ok(Self(value))
    }
}
