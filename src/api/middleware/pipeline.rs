//! Fixed-order interceptor pipeline.
//!
//! Every request flows through the same chain of [`Interceptor`] stages
//! before it reaches the router:
//!
//! ```text
//! ErrorTranslation → BearerAuth → AccessLog → Router → handler
//! ```
//!
//! Each stage receives the request and a [`Next`] value representing the rest
//! of the chain. Calling `next.run(request)` continues; returning a response
//! without calling it short-circuits, and no later stage runs.
//!
//! The pipeline is built once at startup and mounted on the router as a
//! stack of axum middleware layers, outermost stage first.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};

use super::access_log::AccessLog;
use super::auth::BearerAuth;
use super::error_translation::ErrorTranslation;

/// A single pipeline stage.
///
/// # Invariants
///
/// - Call `next.run()` at most once; not calling it is a short-circuit
/// - Return a response on every path
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    /// Stage name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Processes the request, optionally delegating to the rest of the chain.
    async fn intercept(&self, request: Request, next: Next) -> Response;
}

/// A type-erased stage that can be stored in the pipeline.
pub type BoxedInterceptor = Arc<dyn Interceptor>;

/// Ordered list of interceptors wrapped around a router.
#[derive(Clone)]
pub struct Pipeline {
    stages: Vec<BoxedInterceptor>,
}

impl Pipeline {
    /// Creates an empty pipeline builder.
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// The service pipeline: error translation outermost, then bearer
    /// authentication, then access logging.
    ///
    /// Error translation has to wrap everything else so a fault in any later
    /// stage still produces the generic 500.
    #[must_use]
    pub fn standard(api_token: &str) -> Self {
        Self::builder()
            .stage(ErrorTranslation::new())
            .stage(BearerAuth::new(api_token))
            .stage(AccessLog::new())
            .build()
    }

    /// Returns the stage names, outermost first.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Mounts the stages on `router`.
    ///
    /// Layers added later run first, so stages are applied innermost-first to
    /// make the first stage the outermost one.
    pub fn wrap(&self, router: Router) -> Router {
        self.stages.iter().rev().fold(router, |router, stage| {
            let stage = Arc::clone(stage);
            router.layer(middleware::from_fn(move |request: Request, next: Next| {
                let stage = Arc::clone(&stage);
                async move { stage.intercept(request, next).await }
            }))
        })
    }
}

/// Builder for [`Pipeline`]. Stages run in the order they are added.
#[derive(Default)]
pub struct PipelineBuilder {
    stages: Vec<BoxedInterceptor>,
}

impl PipelineBuilder {
    /// Appends a stage inside all previously added ones.
    #[must_use]
    pub fn stage(mut self, interceptor: impl Interceptor) -> Self {
        self.stages.push(Arc::new(interceptor));
        self
    }

    #[must_use]
    pub fn build(self) -> Pipeline {
        Pipeline {
            stages: self.stages,
        }
    }
}
