use async_trait::async_trait;

use common::SaleId;

use crate::{Result, Sale};

/// Core trait for sale store implementations.
///
/// The store is a keyed map from sale ID to record: insert-or-replace,
/// read-by-key, read-all. There is no delete operation and no secondary
/// indices; every filtered query runs a full scan over `list_all`.
/// All implementations must be thread-safe (Send + Sync) and must make
/// each individual operation atomic. Atomicity across a read-modify-write
/// pair is NOT provided.
#[async_trait]
pub trait SaleStore: Send + Sync {
    /// Inserts or fully replaces the record at `sale.id`.
    ///
    /// Fails with `EmptyId` if the sale carries a nil identifier.
    /// Replacing an existing record is not an error.
    async fn put(&self, sale: Sale) -> Result<()>;

    /// Retrieves the record for `id`.
    ///
    /// Fails with `NotFound` if no record exists.
    async fn get(&self, id: SaleId) -> Result<Sale>;

    /// Retrieves every stored record.
    ///
    /// Order is unspecified; callers must not rely on it.
    async fn list_all(&self) -> Result<Vec<Sale>>;
}
