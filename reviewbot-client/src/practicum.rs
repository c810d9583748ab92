//! Homework status API client

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{self, ClientError, Result};

/// Client for the homework review status endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the `homework_statuses` endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the status endpoint
    /// * `token` - Pre-issued OAuth token
    /// * `timeout` - Upper bound for a single request
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self::with_client(endpoint, token, crate::http_client(timeout)?))
    }

    /// Create a new status API client with a custom HTTP client
    pub fn with_client(endpoint: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp bounding the query window (0 for all history)
    ///
    /// # Returns
    /// The decoded JSON body. Shape checks are left to the caller.
    ///
    /// # Errors
    /// * [`ClientError::Transport`] if the request does not complete
    /// * [`ClientError::UnexpectedStatus`] if the status is not 200
    /// * [`ClientError::ParseError`] if the body is not JSON
    pub async fn get_homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(error::transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::unexpected_status(status, StatusCode::OK));
        }

        let body = response.text().await.map_err(error::transport)?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &crate::redact(&self.token))
            .finish()
    }
}
