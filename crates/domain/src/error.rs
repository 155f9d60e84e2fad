//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RuleHubError`] via `#[from]`. No `String` catch-all variants.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum RuleHubError {
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    #[error("resource not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage failure")]
    Storage(#[from] StorageError),
}

/// A domain invariant was violated.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },
}

/// A lookup by identifier yielded nothing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The storage backend failed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("storage backend failed: {message}")]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
