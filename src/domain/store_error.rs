//! Outcomes of store operations that are expected and recoverable.

/// Failure returned by [`crate::domain::UserStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(i64),
    #[error("invalid user data: {field}")]
    Validation { field: &'static str },
}

impl StoreError {
    /// Public message for any validation failure.
    pub const VALIDATION_MESSAGE: &'static str =
        "Invalid user data. Name cannot be empty, and email must be valid.";
}
