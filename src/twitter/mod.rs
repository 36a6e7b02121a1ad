pub mod v1;

use crate::model::{Account, Post};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Rate limited until {reset}")]
    RateLimited { reset: DateTime<Utc> },
    #[error("Unable to parse response: {0}")]
    Parse(String),
    #[error("Request failed: {0}")]
    Request(String),
}

#[async_trait]
pub trait TwitterClient: Send + Sync {
    /// Check the credentials and look up the account they belong to
    async fn verify_credentials(&self) -> Result<Account, ApiError>;

    /// Fetch one page of the account's timeline, newest first.
    ///
    /// `owner` scopes the request to a handle; without one the client falls back to whatever
    /// account its credentials identify. Only tweets with an ID at most `max_id` are returned.
    async fn user_timeline(
        &self,
        owner: Option<&str>,
        max_id: Option<u64>,
        count: u32,
    ) -> Result<Vec<Post>, ApiError>;

    async fn delete_tweet(&self, id: u64) -> Result<(), ApiError>;
}
