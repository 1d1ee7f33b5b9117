//! In-memory user directory for testing.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use common::UserId;

use super::{DirectoryError, UserDirectory};

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: HashSet<UserId>,
    unavailable: bool,
}

/// In-memory user directory for testing.
///
/// Holds a set of known user IDs and can be switched into an unavailable
/// mode where every lookup fails with an infrastructure error.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

impl InMemoryUserDirectory {
    /// Creates a new empty in-memory directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user as existing.
    pub fn insert(&self, user_id: impl Into<UserId>) {
        self.state.write().unwrap().users.insert(user_id.into());
    }

    /// Makes every subsequent lookup fail with an infrastructure error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.write().unwrap().unavailable = unavailable;
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, user_id: &UserId) -> Result<bool, DirectoryError> {
        let state = self.state.read().unwrap();

        if state.unavailable {
            return Err(DirectoryError::Unavailable(
                "lookup failed: directory offline".to_string(),
            ));
        }

        Ok(state.users.contains(user_id))
    }
}
