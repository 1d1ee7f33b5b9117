//! Shared identifier and value types for the sales service.

mod types;

pub use types::{SaleId, UserId, Version};
