//! Homework status repository

use async_trait::async_trait;
use reviewbot_client::{PracticumClient, Result};
use serde_json::Value;

/// Source of raw homework status responses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses changed since `from_date`
    ///
    /// The response is returned undecoded into domain types; shape checks
    /// happen in the poll loop.
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

#[async_trait]
impl StatusRepository for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.get_homework_statuses(from_date).await
    }
}
