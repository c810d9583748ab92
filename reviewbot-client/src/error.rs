//! Error types for the reviewbot clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the status API or the messenger
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request did not complete (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than the expected one
    #[error("API returned status {status}, expected {expected}")]
    UnexpectedStatus {
        /// HTTP status code received
        status: u16,
        /// HTTP status code the endpoint should return
        expected: u16,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The messenger refused or could not accept the message
    #[error("Message delivery failed: {0}")]
    DeliveryFailed(String),
}

impl ClientError {
    /// Create an unexpected status error
    pub fn unexpected_status(status: reqwest::StatusCode, expected: reqwest::StatusCode) -> Self {
        Self::UnexpectedStatus {
            status: status.as_u16(),
            expected: expected.as_u16(),
        }
    }
}

/// Drops the request URL from a reqwest error
///
/// Bot API URLs embed the bot token, which must not reach the logs.
pub(crate) fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.without_url())
}
