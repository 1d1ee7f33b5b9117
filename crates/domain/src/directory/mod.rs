//! User existence check against the external user system.

mod http;
mod memory;

pub use http::HttpUserDirectory;
pub use memory::InMemoryUserDirectory;

use async_trait::async_trait;
use thiserror::Error;

use common::UserId;

/// Errors from the user directory.
///
/// A directory error never means "the user does not exist" — that case is
/// the `Ok(false)` answer of the check. Every variant here is an
/// infrastructure failure.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request to the user API could not be completed.
    #[error("error making request to user API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The user API answered with a status that is neither found nor not-found.
    #[error("user API returned unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// The directory could not be consulted at all.
    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

/// Trait for checking that a user exists in the external user system.
///
/// The contract is three-way and implementations must preserve it exactly:
/// - `Ok(true)` — the user exists;
/// - `Ok(false)` — the user system answered and the user does not exist;
/// - `Err(_)` — the check itself failed; nothing is known about the user.
///
/// Callers must branch on the boolean, not on error-ness: conflating
/// "user absent" with "check unavailable" misreports caller-fixable
/// failures as infrastructure failures and vice versa.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Reports whether `user_id` exists in the user system.
    async fn exists(&self, user_id: &UserId) -> Result<bool, DirectoryError>;
}
