use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::SaleId;

use crate::{Result, Sale, SaleStore, SaleStoreError};

/// In-memory sale store implementation.
///
/// Stores all records in a shared map guarded by an async `RwLock`, so
/// `put`/`get`/`list_all` are individually atomic. Contents are volatile
/// across restarts.
#[derive(Clone, Default)]
pub struct InMemorySaleStore {
    sales: Arc<RwLock<HashMap<SaleId, Sale>>>,
}

impl InMemorySaleStore {
    /// Creates a new empty in-memory sale store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of records stored.
    pub async fn sale_count(&self) -> usize {
        self.sales.read().await.len()
    }

    /// Clears all records.
    pub async fn clear(&self) {
        self.sales.write().await.clear();
    }
}

#[async_trait]
impl SaleStore for InMemorySaleStore {
    async fn put(&self, sale: Sale) -> Result<()> {
        if sale.id.is_nil() {
            return Err(SaleStoreError::EmptyId);
        }

        let mut sales = self.sales.write().await;
        sales.insert(sale.id, sale);
        Ok(())
    }

    async fn get(&self, id: SaleId) -> Result<Sale> {
        let sales = self.sales.read().await;
        sales.get(&id).cloned().ok_or(SaleStoreError::NotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Sale>> {
        let sales = self.sales.read().await;
        Ok(sales.values().cloned().collect())
    }
}
