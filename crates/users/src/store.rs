use async_trait::async_trait;

use common::UserId;

use crate::{Result, User};

/// Core trait for user store implementations.
///
/// A keyed map from user ID to record. Unlike the sale store, users may
/// be deleted. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts or fully replaces the record at `user.id`.
    ///
    /// Fails with `EmptyId` if the identifier is empty.
    async fn put(&self, user: User) -> Result<()>;

    /// Retrieves the record for `id`.
    ///
    /// Fails with `NotFound` if no record exists.
    async fn get(&self, id: &UserId) -> Result<User>;

    /// Removes the record for `id`.
    ///
    /// Fails with `NotFound` if no record exists.
    async fn delete(&self, id: &UserId) -> Result<()>;
}
