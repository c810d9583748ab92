//! Bot error taxonomy
//!
//! Every failure the poll loop can see is one of these variants. Only
//! [`BotError::is_fatal`] errors stop the process. Everything else is
//! logged, reported to the recipient, and the loop moves on.

use reviewbot_client::ClientError;
use reviewbot_core::CheckError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// One or more required credentials were not supplied
    #[error("required configuration is absent: {}", .0.join(", "))]
    ConfigurationAbsent(Vec<&'static str>),

    /// Status API or messenger failure
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The status API answered with data of the wrong shape or content
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl BotError {
    /// Whether this error must terminate the process
    ///
    /// An unexpected HTTP status from the status API is escalated so that a
    /// supervisor restarts the bot instead of it polling a broken endpoint
    /// forever.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationAbsent(_) | Self::Client(ClientError::UnexpectedStatus { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_absent_lists_missing_names() {
        let err = BotError::ConfigurationAbsent(vec!["PRACTICUM_TOKEN", "CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "required configuration is absent: PRACTICUM_TOKEN, CHAT_ID"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unexpected_status_is_fatal() {
        let err = BotError::from(ClientError::UnexpectedStatus {
            status: 503,
            expected: 200,
        });
        assert!(err.is_fatal());
    }

    #[test]
    fn test_data_errors_are_not_fatal() {
        assert!(!BotError::from(CheckError::MissingName).is_fatal());
        assert!(!BotError::from(CheckError::UnknownStatus(Some("archived".into()))).is_fatal());
        assert!(!BotError::from(CheckError::MalformedResponse("x".into())).is_fatal());
        assert!(!BotError::from(ClientError::ParseError("x".into())).is_fatal());
    }
}
