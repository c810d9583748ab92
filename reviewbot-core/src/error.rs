//! Error types for response checks

use thiserror::Error;

/// Errors raised while checking a status API response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The response does not match the documented shape
    #[error("API response does not match the expected shape: {0}")]
    MalformedResponse(String),

    /// The submission status is absent or not a known verdict
    #[error("undocumented homework status: {0:?}")]
    UnknownStatus(Option<String>),

    /// The submission has no `homework_name`
    #[error("homework record has no `homework_name` field")]
    MissingName,
}

impl CheckError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
