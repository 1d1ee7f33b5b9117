//! The sale record and its status state machine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use common::{SaleId, UserId, Version};

/// The approval status of a sale.
///
/// State transitions:
/// ```text
/// Pending ──┬──► Approved
///           └──► Rejected
/// ```
///
/// `Pending` is the only non-terminal status; once a sale is approved or
/// rejected it can never change again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Sale is awaiting a decision.
    Pending,

    /// Sale has been approved (terminal).
    Approved,

    /// Sale has been rejected (terminal).
    Rejected,
}

impl SaleStatus {
    /// Parses a status from its lowercase wire representation.
    ///
    /// Returns None for anything other than the three known values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(SaleStatus::Pending),
            "approved" => Some(SaleStatus::Approved),
            "rejected" => Some(SaleStatus::Rejected),
            _ => None,
        }
    }

    /// Returns true if this is a terminal status (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, SaleStatus::Approved | SaleStatus::Rejected)
    }

    /// Returns true if a transition out of this status is allowed.
    pub fn can_transition(&self) -> bool {
        matches!(self, SaleStatus::Pending)
    }

    /// Returns the status name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Approved => "approved",
            SaleStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sales transaction owned by a user of the external user system.
///
/// Records are created once by the lifecycle service, which assigns the
/// identifier, timestamps, and initial version. After creation only the
/// status-transition operation mutates a record, bumping `updated_at` and
/// `version` as it does so. Records are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier, assigned at creation and immutable thereafter.
    pub id: SaleId,

    /// Identifier of the owning user.
    pub user_id: UserId,

    /// Amount of the transaction; strictly positive at creation.
    pub amount: Decimal,

    /// Current approval status.
    pub status: SaleStatus,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,

    /// Advisory mutation counter, starting at 1.
    pub version: Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_statuses() {
        assert_eq!(SaleStatus::parse("pending"), Some(SaleStatus::Pending));
        assert_eq!(SaleStatus::parse("approved"), Some(SaleStatus::Approved));
        assert_eq!(SaleStatus::parse("rejected"), Some(SaleStatus::Rejected));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(SaleStatus::parse(""), None);
        assert_eq!(SaleStatus::parse("Pending"), None);
        assert_eq!(SaleStatus::parse("cancelled"), None);
    }

    #[test]
    fn pending_is_the_only_non_terminal_status() {
        assert!(!SaleStatus::Pending.is_terminal());
        assert!(SaleStatus::Approved.is_terminal());
        assert!(SaleStatus::Rejected.is_terminal());

        assert!(SaleStatus::Pending.can_transition());
        assert!(!SaleStatus::Approved.can_transition());
        assert!(!SaleStatus::Rejected.can_transition());
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(SaleStatus::Pending.to_string(), "pending");
        assert_eq!(SaleStatus::Approved.to_string(), "approved");
        assert_eq!(SaleStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&SaleStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        let back: SaleStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, SaleStatus::Rejected);
    }

    #[test]
    fn sale_serialization_roundtrip() {
        let sale = Sale {
            id: SaleId::new(),
            user_id: UserId::new("u1"),
            amount: Decimal::new(15075, 2),
            status: SaleStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            version: Version::first(),
        };

        let json = serde_json::to_string(&sale).unwrap();
        let back: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(sale, back);
    }
}
