//! Sale records and the keyed store that holds them.

pub mod error;
pub mod memory;
pub mod sale;
pub mod store;

pub use common::{SaleId, UserId, Version};
pub use error::{Result, SaleStoreError};
pub use memory::InMemorySaleStore;
pub use sale::{Sale, SaleStatus};
pub use store::SaleStore;
