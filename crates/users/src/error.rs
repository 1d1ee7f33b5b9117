use thiserror::Error;

use common::UserId;

/// Errors that can occur when interacting with the user store.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// The user carried an empty identifier.
    #[error("user ID must not be empty")]
    EmptyId,

    /// No user exists with the given ID.
    #[error("user not found: {0}")]
    NotFound(UserId),
}

/// Result type for user store operations.
pub type Result<T> = std::result::Result<T, UserStoreError>;
