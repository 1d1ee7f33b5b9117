//! Sales lifecycle service.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;

use common::{SaleId, UserId, Version};
use sale_store::{Sale, SaleStatus, SaleStore, SaleStoreError};

use crate::directory::UserDirectory;
use crate::error::SalesError;

use super::{SearchOutcome, SearchSummary};

/// Service owning the sales lifecycle: creation, status transition, and
/// filtered search with aggregation.
///
/// Holds the sale store and the user directory. Each operation validates
/// its input, consults the directory when required, and either fully
/// commits its write or writes nothing. Nothing is retried internally;
/// failures propagate to the caller on first occurrence.
pub struct SalesService<S: SaleStore, D: UserDirectory> {
    store: S,
    directory: D,
}

// The initial status is drawn uniformly from all three values, so a sale
// can start in a terminal status and never become eligible for a
// transition.
fn random_initial_status() -> SaleStatus {
    const STATUSES: [SaleStatus; 3] = [
        SaleStatus::Pending,
        SaleStatus::Approved,
        SaleStatus::Rejected,
    ];
    STATUSES[rand::thread_rng().gen_range(0..STATUSES.len())]
}

impl<S, D> SalesService<S, D>
where
    S: SaleStore,
    D: UserDirectory,
{
    /// Creates a new sales service with the given store and user directory.
    pub fn new(store: S, directory: D) -> Self {
        Self { store, directory }
    }

    /// Creates a new sale for `user_id`.
    ///
    /// The amount must be strictly positive and the user must exist in the
    /// user system. The service assigns the identifier, both timestamps,
    /// version 1, and a random initial status.
    #[tracing::instrument(skip(self))]
    pub async fn create_sale(&self, user_id: UserId, amount: Decimal) -> Result<Sale, SalesError> {
        if amount <= Decimal::ZERO {
            return Err(SalesError::InvalidAmount { amount });
        }

        self.ensure_user_exists(&user_id).await?;

        let now = Utc::now();
        let sale = Sale {
            id: SaleId::new(),
            user_id,
            amount,
            status: random_initial_status(),
            created_at: now,
            updated_at: now,
            version: Version::first(),
        };

        if let Err(err) = self.store.put(sale.clone()).await {
            tracing::error!(sale_id = %sale.id, error = %err, "failed to save sale");
            return Err(SalesError::Storage(err));
        }

        metrics::counter!("sales_created_total").increment(1);
        tracing::info!(
            sale_id = %sale.id,
            user_id = %sale.user_id,
            status = %sale.status,
            "sale created"
        );
        Ok(sale)
    }

    /// Transitions the sale at `id` to `new_status`.
    ///
    /// `new_status` must be exactly `approved` or `rejected`; anything
    /// else, including `pending`, is an invalid status value. The sale must
    /// currently be `pending` — both terminal statuses stay frozen, so
    /// there is no re-approval and no flip-flopping.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, id: SaleId, new_status: &str) -> Result<Sale, SalesError> {
        let mut sale = match self.store.get(id).await {
            Ok(sale) => sale,
            Err(SaleStoreError::NotFound(id)) => return Err(SalesError::NotFound(id)),
            Err(err) => return Err(SalesError::Storage(err)),
        };

        let requested = SaleStatus::parse(new_status)
            .filter(SaleStatus::is_terminal)
            .ok_or_else(|| SalesError::InvalidStatusValue {
                value: new_status.to_string(),
            })?;

        if !sale.status.can_transition() {
            return Err(SalesError::InvalidTransition {
                current: sale.status,
                requested,
            });
        }

        sale.status = requested;
        sale.updated_at = Utc::now();
        sale.version = sale.version.next();

        if let Err(err) = self.store.put(sale.clone()).await {
            tracing::error!(sale_id = %sale.id, error = %err, "failed to update sale");
            return Err(SalesError::Storage(err));
        }

        metrics::counter!("sale_status_updates_total").increment(1);
        tracing::info!(sale_id = %sale.id, status = %sale.status, "sale status updated");
        Ok(sale)
    }

    /// Searches the sales of `user_id`, optionally narrowed to one status,
    /// and aggregates over the matched set.
    ///
    /// An absent or empty filter means "no filter". The user must exist in
    /// the user system; a user with no matching sales is a success with an
    /// all-zero summary, not an error.
    #[tracing::instrument(skip(self))]
    pub async fn search(
        &self,
        user_id: UserId,
        status_filter: Option<&str>,
    ) -> Result<SearchOutcome, SalesError> {
        let filter = match status_filter {
            None | Some("") => None,
            Some(raw) => {
                Some(
                    SaleStatus::parse(raw).ok_or_else(|| SalesError::InvalidStatusValue {
                        value: raw.to_string(),
                    })?,
                )
            }
        };

        self.ensure_user_exists(&user_id).await?;

        let sales: Vec<Sale> = self
            .store
            .list_all()
            .await?
            .into_iter()
            .filter(|sale| sale.user_id == user_id)
            .filter(|sale| filter.is_none_or(|status| sale.status == status))
            .collect();

        let summary = SearchSummary::from_sales(&sales);

        metrics::counter!("sale_searches_total").increment(1);
        tracing::debug!(
            user_id = %user_id,
            quantity = summary.quantity,
            "sales search completed"
        );
        Ok(SearchOutcome { sales, summary })
    }

    /// Consults the user directory, translating its three-way answer into
    /// the service's error taxonomy.
    async fn ensure_user_exists(&self, user_id: &UserId) -> Result<(), SalesError> {
        match self.directory.exists(user_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(SalesError::UserNotFound {
                user_id: user_id.clone(),
            }),
            Err(err) => {
                tracing::error!(user_id = %user_id, error = %err, "error validating user");
                Err(SalesError::ValidationUnavailable(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sale_store::InMemorySaleStore;

    use crate::directory::InMemoryUserDirectory;

    use super::*;

    fn setup() -> (
        SalesService<InMemorySaleStore, InMemoryUserDirectory>,
        InMemorySaleStore,
        InMemoryUserDirectory,
    ) {
        let store = InMemorySaleStore::new();
        let directory = InMemoryUserDirectory::new();
        let service = SalesService::new(store.clone(), directory.clone());
        (service, store, directory)
    }

    async fn seed_sale(
        store: &InMemorySaleStore,
        user_id: &str,
        amount: Decimal,
        status: SaleStatus,
    ) -> SaleId {
        let now = Utc::now();
        let sale = Sale {
            id: SaleId::new(),
            user_id: UserId::new(user_id),
            amount,
            status,
            created_at: now,
            updated_at: now,
            version: Version::first(),
        };
        let id = sale.id;
        store.put(sale).await.unwrap();
        id
    }

    #[tokio::test]
    async fn create_sale_for_existing_user() {
        let (service, store, directory) = setup();
        directory.insert("u1");

        let sale = service
            .create_sale(UserId::new("u1"), Decimal::new(15075, 2))
            .await
            .unwrap();

        assert!(!sale.id.is_nil());
        assert_eq!(sale.user_id, UserId::new("u1"));
        assert_eq!(sale.amount, Decimal::new(15075, 2));
        assert_eq!(sale.version.as_i64(), 1);
        assert_eq!(sale.created_at, sale.updated_at);
        assert!(matches!(
            sale.status,
            SaleStatus::Pending | SaleStatus::Approved | SaleStatus::Rejected
        ));

        let stored = store.get(sale.id).await.unwrap();
        assert_eq!(stored, sale);
    }

    #[tokio::test]
    async fn create_sale_rejects_non_positive_amounts() {
        let (service, store, directory) = setup();
        directory.insert("u1");

        for amount in [Decimal::ZERO, Decimal::new(-100, 2)] {
            let result = service.create_sale(UserId::new("u1"), amount).await;
            assert!(matches!(result, Err(SalesError::InvalidAmount { .. })));
        }

        assert_eq!(store.sale_count().await, 0);
    }

    #[tokio::test]
    async fn create_sale_for_unknown_user_fails() {
        let (service, store, _directory) = setup();

        let result = service
            .create_sale(UserId::new("ghost"), Decimal::new(100, 0))
            .await;

        assert!(
            matches!(result, Err(SalesError::UserNotFound { ref user_id }) if user_id.as_str() == "ghost")
        );
        assert_eq!(store.sale_count().await, 0);
    }

    #[tokio::test]
    async fn create_sale_surfaces_directory_outage_as_infrastructure() {
        let (service, store, directory) = setup();
        directory.insert("u1");
        directory.set_unavailable(true);

        let result = service
            .create_sale(UserId::new("u1"), Decimal::new(100, 0))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, SalesError::ValidationUnavailable(_)));
        assert!(err.is_infrastructure());
        assert_eq!(store.sale_count().await, 0);
    }

    #[tokio::test]
    async fn update_status_approves_a_pending_sale() {
        let (service, store, _) = setup();
        let id = seed_sale(&store, "u1", Decimal::new(100, 0), SaleStatus::Pending).await;
        let before = store.get(id).await.unwrap();

        let sale = service.update_status(id, "approved").await.unwrap();

        assert_eq!(sale.status, SaleStatus::Approved);
        assert_eq!(sale.version.as_i64(), 2);
        assert!(sale.updated_at >= before.updated_at);
        assert_eq!(sale.created_at, before.created_at);

        let stored = store.get(id).await.unwrap();
        assert_eq!(stored, sale);
    }

    #[tokio::test]
    async fn update_status_rejects_a_pending_sale() {
        let (service, store, _) = setup();
        let id = seed_sale(&store, "u1", Decimal::new(100, 0), SaleStatus::Pending).await;

        let sale = service.update_status(id, "rejected").await.unwrap();
        assert_eq!(sale.status, SaleStatus::Rejected);
    }

    #[tokio::test]
    async fn update_status_on_missing_sale_is_not_found() {
        let (service, _, _) = setup();
        let id = SaleId::new();

        let result = service.update_status(id, "approved").await;
        assert!(matches!(result, Err(SalesError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn update_status_rejects_bad_status_values() {
        let (service, store, _) = setup();
        let id = seed_sale(&store, "u1", Decimal::new(100, 0), SaleStatus::Pending).await;

        for bad in ["pending", "Approved", "cancelled", ""] {
            let result = service.update_status(id, bad).await;
            assert!(
                matches!(result, Err(SalesError::InvalidStatusValue { ref value }) if value == bad)
            );
        }

        // The sale was never touched.
        let stored = store.get(id).await.unwrap();
        assert_eq!(stored.status, SaleStatus::Pending);
        assert_eq!(stored.version.as_i64(), 1);
    }

    #[tokio::test]
    async fn update_status_on_terminal_sale_is_an_invalid_transition() {
        let (service, store, _) = setup();

        for current in [SaleStatus::Approved, SaleStatus::Rejected] {
            let id = seed_sale(&store, "u1", Decimal::new(100, 0), current).await;

            for requested in ["approved", "rejected"] {
                let result = service.update_status(id, requested).await;
                assert!(matches!(
                    result,
                    Err(SalesError::InvalidTransition { current: c, .. }) if c == current
                ));
            }

            let stored = store.get(id).await.unwrap();
            assert_eq!(stored.version.as_i64(), 1);
        }
    }

    #[tokio::test]
    async fn search_without_filter_matches_every_sale_of_the_user() {
        let (service, store, directory) = setup();
        directory.insert("user1");

        seed_sale(&store, "user1", Decimal::new(100, 0), SaleStatus::Approved).await;
        seed_sale(&store, "user1", Decimal::new(200, 0), SaleStatus::Pending).await;
        seed_sale(&store, "user2", Decimal::new(50, 0), SaleStatus::Rejected).await;
        seed_sale(&store, "user1", Decimal::new(150, 0), SaleStatus::Approved).await;

        let outcome = service.search(UserId::new("user1"), None).await.unwrap();

        assert_eq!(outcome.sales.len(), 3);
        assert_eq!(outcome.summary.quantity, 3);
        assert_eq!(outcome.summary.approved, 2);
        assert_eq!(outcome.summary.pending, 1);
        assert_eq!(outcome.summary.rejected, 0);
        assert_eq!(outcome.summary.total_amount, Decimal::new(450, 0));
    }

    #[tokio::test]
    async fn search_with_filter_aggregates_over_the_matched_set_only() {
        let (service, store, directory) = setup();
        directory.insert("user1");

        seed_sale(&store, "user1", Decimal::new(100, 0), SaleStatus::Approved).await;
        seed_sale(&store, "user1", Decimal::new(200, 0), SaleStatus::Pending).await;
        seed_sale(&store, "user2", Decimal::new(50, 0), SaleStatus::Rejected).await;
        seed_sale(&store, "user1", Decimal::new(150, 0), SaleStatus::Approved).await;

        let outcome = service
            .search(UserId::new("user1"), Some("pending"))
            .await
            .unwrap();

        assert_eq!(outcome.sales.len(), 1);
        assert_eq!(outcome.summary.quantity, 1);
        assert_eq!(outcome.summary.pending, 1);
        assert_eq!(outcome.summary.approved, 0);
        assert_eq!(outcome.summary.total_amount, Decimal::new(200, 0));
    }

    #[tokio::test]
    async fn search_with_empty_filter_means_no_filter() {
        let (service, store, directory) = setup();
        directory.insert("u1");
        seed_sale(&store, "u1", Decimal::new(100, 0), SaleStatus::Approved).await;
        seed_sale(&store, "u1", Decimal::new(200, 0), SaleStatus::Pending).await;

        let outcome = service.search(UserId::new("u1"), Some("")).await.unwrap();
        assert_eq!(outcome.summary.quantity, 2);
    }

    #[tokio::test]
    async fn search_rejects_bad_filter_values_before_any_lookup() {
        let (service, _, directory) = setup();
        // The directory is unavailable: a bad filter must fail first.
        directory.set_unavailable(true);

        let result = service.search(UserId::new("u1"), Some("cancelled")).await;
        assert!(
            matches!(result, Err(SalesError::InvalidStatusValue { ref value }) if value == "cancelled")
        );
    }

    #[tokio::test]
    async fn search_for_unknown_user_fails() {
        let (service, _, _) = setup();

        let result = service.search(UserId::new("ghost"), None).await;
        assert!(matches!(result, Err(SalesError::UserNotFound { .. })));
    }

    #[tokio::test]
    async fn search_with_no_matching_sales_is_an_empty_success() {
        let (service, store, directory) = setup();
        directory.insert("u1");
        seed_sale(&store, "someone-else", Decimal::new(100, 0), SaleStatus::Pending).await;

        let outcome = service.search(UserId::new("u1"), None).await.unwrap();

        assert!(outcome.sales.is_empty());
        assert_eq!(outcome.summary, SearchSummary::default());
    }
}
