//! Bearer token authentication stage.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBearer;
use sha2::{Digest, Sha256};
use tracing::warn;

use super::pipeline::Interceptor;

/// Plain-text body of every 401 response.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid or missing token.";

/// Authenticates requests against a single shared secret.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Short-circuits with `401 Unauthorized` if:
/// - Authorization header is missing
/// - Header is not of the `Bearer <token>` form
/// - Token does not match the configured secret
///
/// The body is the plain text [`UNAUTHORIZED_MESSAGE`]. Adds
/// `WWW-Authenticate: Bearer` per RFC 6750.
///
/// Tokens are compared as SHA-256 digests, so the comparison time does not
/// depend on how long a prefix of the secret was guessed.
pub struct BearerAuth {
    secret_digest: Vec<u8>,
}

impl BearerAuth {
    /// Creates the stage for the given shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            secret_digest: Sha256::digest(secret.as_bytes()).to_vec(),
        }
    }

    fn accepts(&self, token: &str) -> bool {
        Sha256::digest(token.as_bytes()).as_slice() == self.secret_digest.as_slice()
    }
}

/// The 401 returned when authentication fails.
pub fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        UNAUTHORIZED_MESSAGE,
    )
        .into_response()
}

#[async_trait]
impl Interceptor for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer_auth"
    }

    async fn intercept(&self, request: Request, next: Next) -> Response {
        let (mut parts, body) = request.into_parts();

        let authorized = match AuthBearer::from_request_parts(&mut parts, &()).await {
            Ok(AuthBearer(token)) => self.accepts(&token),
            Err(_) => false,
        };

        if !authorized {
            warn!(
                method = %parts.method,
                path = parts.uri.path(),
                "Rejected request with invalid or missing bearer token"
            );
            return unauthorized_response();
        }

        next.run(Request::from_parts(parts, body)).await
    }
}
