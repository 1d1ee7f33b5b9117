use thiserror::Error;

use common::SaleId;

/// Errors that can occur when interacting with the sale store.
#[derive(Debug, Error)]
pub enum SaleStoreError {
    /// The sale carried a nil identifier.
    #[error("sale ID must not be empty")]
    EmptyId,

    /// No sale exists with the given ID.
    #[error("sale not found: {0}")]
    NotFound(SaleId),
}

/// Result type for sale store operations.
pub type Result<T> = std::result::Result<T, SaleStoreError>;
