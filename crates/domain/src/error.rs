//! Domain error types.

use rust_decimal::Decimal;
use thiserror::Error;

use common::{SaleId, UserId};
use sale_store::{SaleStatus, SaleStoreError};

use crate::directory::DirectoryError;

/// Errors that can occur during sales lifecycle operations.
///
/// `InvalidAmount`, `UserNotFound`, `InvalidStatusValue`, `InvalidTransition`,
/// and `NotFound` are caller-fixable; `ValidationUnavailable` and `Storage`
/// are infrastructure failures the caller cannot fix by changing the request.
#[derive(Debug, Error)]
pub enum SalesError {
    /// The amount was zero or negative.
    #[error("amount must be greater than zero (got {amount})")]
    InvalidAmount { amount: Decimal },

    /// The user system answered and the user does not exist.
    #[error("user with ID '{user_id}' not found")]
    UserNotFound { user_id: UserId },

    /// The user existence check itself failed; nothing is known about the user.
    #[error("error validating user: {0}")]
    ValidationUnavailable(#[source] DirectoryError),

    /// No sale exists with the given ID.
    #[error("sale not found: {0}")]
    NotFound(SaleId),

    /// The status value is not an accepted transition target.
    #[error("invalid status value: '{value}'")]
    InvalidStatusValue { value: String },

    /// The sale is not in a status that permits the requested transition.
    #[error("invalid status transition: cannot move from {current} to {requested}")]
    InvalidTransition {
        current: SaleStatus,
        requested: SaleStatus,
    },

    /// The sale store failed.
    #[error("sale storage error: {0}")]
    Storage(#[from] SaleStoreError),
}

impl SalesError {
    /// Returns true for failures the caller cannot fix by changing the request.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            SalesError::ValidationUnavailable(_) | SalesError::Storage(_)
        )
    }
}
