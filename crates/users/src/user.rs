use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::{UserId, Version};

/// A user account record.
///
/// Identifiers, timestamps, and the version counter are assigned by the
/// service, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at creation.
    pub id: UserId,

    /// Full name.
    pub name: String,

    /// Postal address.
    pub address: String,

    /// Display nickname.
    pub nick_name: String,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,

    /// Advisory mutation counter, starting at 1.
    pub version: Version,
}
