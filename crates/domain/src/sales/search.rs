//! Search results and their aggregation.

use rust_decimal::Decimal;
use serde::Serialize;

use sale_store::{Sale, SaleStatus};

/// Summary counters computed over a search's matched set.
///
/// All counters cover the matched set only: when a status filter is
/// applied, sales excluded by the filter are not counted anywhere, not
/// even in `total_amount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSummary {
    /// Number of matched sales.
    pub quantity: u64,

    /// Matched sales currently pending.
    pub pending: u64,

    /// Matched sales approved.
    pub approved: u64,

    /// Matched sales rejected.
    pub rejected: u64,

    /// Sum of the matched sales' amounts.
    pub total_amount: Decimal,
}

impl SearchSummary {
    /// Computes the summary for a matched set.
    pub fn from_sales(sales: &[Sale]) -> Self {
        let mut summary = SearchSummary::default();
        for sale in sales {
            summary.quantity += 1;
            summary.total_amount += sale.amount;
            match sale.status {
                SaleStatus::Pending => summary.pending += 1,
                SaleStatus::Approved => summary.approved += 1,
                SaleStatus::Rejected => summary.rejected += 1,
            }
        }
        summary
    }
}

/// A search's matched sales together with their aggregation.
///
/// The order of `sales` is unspecified.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub sales: Vec<Sale>,
    pub summary: SearchSummary,
}
