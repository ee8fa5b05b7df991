//! Domain layer: the user entity, the store that owns users, and the
//! repository contract the rest of the service talks to.
//!
//! # Architecture
//!
//! - [`entities`] - User record and candidate input
//! - [`user_store`] - Ordered, indexed in-memory collection with id allocation
//! - [`repositories`] - Async data access trait implemented by infrastructure
//!
//! The domain layer has no dependencies on HTTP or on the runtime.

pub mod entities;
pub mod repositories;
pub mod store_error;
pub mod user_store;

pub use store_error::StoreError;
pub use user_store::UserStore;
