//! Interceptor pipeline wrapped around the API router.
//!
//! - [`pipeline`] - [`pipeline::Interceptor`] trait and the ordered [`pipeline::Pipeline`]
//! - [`error_translation`] - Outermost fault boundary (generic 500)
//! - [`auth`] - Shared-secret bearer authentication (401 short-circuit)
//! - [`access_log`] - Method/path on entry, status/latency on exit

pub mod access_log;
pub mod auth;
pub mod error_translation;
pub mod pipeline;

pub use pipeline::{Interceptor, Pipeline};
