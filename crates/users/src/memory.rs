use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::UserId;

use crate::{Result, User, UserStore, UserStoreError};

/// In-memory user store implementation.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    /// Creates a new empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of records stored.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn put(&self, user: User) -> Result<()> {
        if user.id.as_str().is_empty() {
            return Err(UserStoreError::EmptyId);
        }

        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get(&self, id: &UserId) -> Result<User> {
        let users = self.users.read().await;
        users
            .get(id)
            .cloned()
            .ok_or_else(|| UserStoreError::NotFound(id.clone()))
    }

    async fn delete(&self, id: &UserId) -> Result<()> {
        let mut users = self.users.write().await;
        users
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserStoreError::NotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use common::Version;

    use super::*;

    fn sample_user(id: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(id),
            name: "Ada Lovelace".to_string(),
            address: "12 St James Square".to_string(),
            nick_name: "ada".to_string(),
            created_at: now,
            updated_at: now,
            version: Version::first(),
        }
    }

    #[tokio::test]
    async fn put_and_get_roundtrip() {
        let store = InMemoryUserStore::new();
        let user = sample_user("u1");

        store.put(user.clone()).await.unwrap();

        let stored = store.get(&UserId::new("u1")).await.unwrap();
        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn put_rejects_empty_id() {
        let store = InMemoryUserStore::new();
        let user = sample_user("");

        let result = store.put(user).await;
        assert!(matches!(result, Err(UserStoreError::EmptyId)));
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let store = InMemoryUserStore::new();

        let result = store.get(&UserId::new("ghost")).await;
        assert!(matches!(result, Err(UserStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = InMemoryUserStore::new();
        store.put(sample_user("u1")).await.unwrap();

        store.delete(&UserId::new("u1")).await.unwrap();
        assert_eq!(store.user_count().await, 0);

        let result = store.delete(&UserId::new("u1")).await;
        assert!(matches!(result, Err(UserStoreError::NotFound(_))));
    }
}
