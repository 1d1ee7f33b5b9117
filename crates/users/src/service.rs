//! User CRUD service.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use common::{UserId, Version};

use crate::{Result, User, UserStore};

/// Fields supplied by a caller when creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub address: String,
    pub nick_name: String,
}

/// Partial update for an existing user; only provided fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub nick_name: Option<String>,
}

/// Service for managing user accounts.
///
/// Owns identifier, timestamp, and version assignment; callers never set
/// those fields themselves.
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    /// Creates a new user service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Adds a brand-new user, assigning its ID, timestamps, and version 1.
    #[tracing::instrument(skip(self, new_user))]
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let now = Utc::now();
        let user = User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: new_user.name,
            address: new_user.address,
            nick_name: new_user.nick_name,
            created_at: now,
            updated_at: now,
            version: Version::first(),
        };

        self.store.put(user.clone()).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Retrieves a user by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: &UserId) -> Result<User> {
        self.store.get(id).await
    }

    /// Applies a partial update, bumping `updated_at` and `version`.
    #[tracing::instrument(skip(self, update))]
    pub async fn update(&self, id: &UserId, update: UserUpdate) -> Result<User> {
        let mut user = self.store.get(id).await?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(address) = update.address {
            user.address = address;
        }
        if let Some(nick_name) = update.nick_name {
            user.nick_name = nick_name;
        }

        user.updated_at = Utc::now();
        user.version = user.version.next();

        self.store.put(user.clone()).await?;
        Ok(user)
    }

    /// Removes a user by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &UserId) -> Result<()> {
        self.store.delete(id).await
    }
}
