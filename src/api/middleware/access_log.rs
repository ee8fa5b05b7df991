//! Request/response logging stage.

use std::time::Instant;

use async_trait::async_trait;
use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{error, info};

use super::pipeline::Interceptor;

/// Logs every request on entry and its outcome on exit.
///
/// # Logging Behavior
///
/// **On Request:** method and path at `INFO`.
///
/// **On Response:** status code and latency in milliseconds at `INFO`.
///
/// If the rest of the chain never yields a response (it panicked, or the
/// request future was dropped), an `ERROR` record with the elapsed latency is
/// written instead. The exit record is emitted from a drop guard, so exactly
/// one of the two always appears.
///
/// # Example Logs
///
/// ```text
/// INFO Incoming request method=POST path=/users
/// INFO Request completed method=POST path=/users status=201 latency_ms=0
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessLog;

impl AccessLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Interceptor for AccessLog {
    fn name(&self) -> &'static str {
        "access_log"
    }

    async fn intercept(&self, request: Request, next: Next) -> Response {
        let timer = RequestTimer::start(request.method().clone(), request.uri().path());
        info!(method = %timer.method, path = %timer.path, "Incoming request");

        let response = next.run(request).await;

        timer.finish(response.status());
        response
    }
}

/// Measures one request and writes its exit record when dropped.
struct RequestTimer {
    method: Method,
    path: String,
    started: Instant,
    status: Option<StatusCode>,
}

impl RequestTimer {
    fn start(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_owned(),
            started: Instant::now(),
            status: None,
        }
    }

    fn finish(mut self, status: StatusCode) {
        self.status = Some(status);
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let latency_ms = self.started.elapsed().as_millis() as u64;

        match self.status {
            Some(status) => info!(
                method = %self.method,
                path = %self.path,
                status = status.as_u16(),
                latency_ms,
                "Request completed"
            ),
            None => error!(
                method = %self.method,
                path = %self.path,
                latency_ms,
                "Request ended without a response"
            ),
        }
    }
}
