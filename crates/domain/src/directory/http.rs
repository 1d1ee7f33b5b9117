//! HTTP implementation of the user directory.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use common::UserId;

use super::{DirectoryError, UserDirectory};

/// User directory backed by the user system's HTTP API.
///
/// Issues `GET {base_url}/users/{id}` and interprets the response: 200
/// means the user exists, 404 means it does not, anything else is an
/// infrastructure error. Carries no retry or timeout policy of its own;
/// callers that need those wrap the call at the transport layer.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
}

impl HttpUserDirectory {
    /// Creates a directory client for the user API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a directory client reusing an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn exists(&self, user_id: &UserId) -> Result<bool, DirectoryError> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!(user_id = %user_id, %status, "user existence lookup");

        match status {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            other => Err(DirectoryError::UnexpectedStatus(other)),
        }
    }
}
