//! Bot configuration
//!
//! Command-line flags fall back to environment variables (a `.env` file is
//! loaded before parsing). The three credentials are checked by
//! [`verify_config`] before anything else is built.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::BotError;

/// Default homework status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "reviewbot")]
#[command(about = "Watches homework review status and reports changes to Telegram", long_about = None)]
pub struct Args {
    /// OAuth token for the homework status API
    #[arg(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    pub practicum_token: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat that receives notifications
    #[arg(long, env = "CHAT_ID")]
    pub chat_id: Option<String>,

    /// Homework status endpoint
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API_URL)]
    pub telegram_api_url: String,

    /// Seconds between polls
    #[arg(long, env = "RETRY_PERIOD", default_value_t = 600)]
    pub retry_period: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 10)]
    pub request_timeout: u64,

    /// Unix timestamp the status query starts from
    #[arg(long, env = "FROM_DATE", default_value_t = 0)]
    pub from_date: i64,

    /// Append log lines to this file in addition to stderr
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Credentials the bot cannot run without
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub chat_id: Option<String>,
}

impl Credentials {
    /// Names of the credentials that are absent or empty
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("CHAT_ID", &self.chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| !is_present(value))
        .map(|(name, _)| name)
        .collect()
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Returns `true` only if every credential is present and non-empty
pub fn verify_config(credentials: &Credentials) -> bool {
    credentials.missing().is_empty()
}

/// Bot configuration
///
/// Built once at startup and shared by reference afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Recipient chat
    pub chat_id: String,

    /// Status endpoint URL
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub retry_period: Duration,

    /// Upper bound for each HTTP request
    pub request_timeout: Duration,

    /// Cursor sent as `from_date`
    pub from_date: i64,
}

impl Config {
    /// Builds the configuration from parsed arguments
    ///
    /// # Errors
    /// Returns [`BotError::ConfigurationAbsent`] naming every missing credential.
    pub fn from_args(args: Args) -> Result<Self, BotError> {
        let credentials = Credentials {
            practicum_token: args.practicum_token,
            telegram_token: args.telegram_token,
            chat_id: args.chat_id,
        };

        if !verify_config(&credentials) {
            return Err(BotError::ConfigurationAbsent(credentials.missing()));
        }

        Ok(Self {
            practicum_token: credentials.practicum_token.unwrap_or_default(),
            telegram_token: credentials.telegram_token.unwrap_or_default(),
            chat_id: credentials.chat_id.unwrap_or_default(),
            endpoint: args.endpoint,
            telegram_api_url: args.telegram_api_url,
            retry_period: Duration::from_secs(args.retry_period),
            request_timeout: Duration::from_secs(args.request_timeout),
            from_date: args.from_date,
        })
    }

    /// Validates the non-credential settings
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_period.is_zero() {
            anyhow::bail!("retry_period must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.from_date < 0 {
            anyhow::bail!("from_date cannot be negative");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    fn credentials(practicum: &str, telegram: &str, chat: &str) -> Credentials {
        let value = |s: &str| Some(s.to_string());
        Credentials {
            practicum_token: value(practicum),
            telegram_token: value(telegram),
            chat_id: value(chat),
        }
    }

    fn full_args() -> Args {
        Args::try_parse_from([
            "reviewbot",
            "--practicum-token",
            "practicum",
            "--telegram-token",
            "123:abc",
            "--chat-id",
            "42",
        ])
        .unwrap()
    }

    #[test]
    fn test_credentials_read_from_env_names() {
        let command = Args::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id().as_str() == id)
                .and_then(|arg| arg.get_env())
                .map(OsStr::to_os_string)
        };

        assert_eq!(env_of("practicum_token").as_deref(), Some(OsStr::new("PRACTICUM_TOKEN")));
        assert_eq!(env_of("telegram_token").as_deref(), Some(OsStr::new("TELEGRAM_TOKEN")));
        assert_eq!(env_of("chat_id").as_deref(), Some(OsStr::new("CHAT_ID")));
    }

    #[test]
    fn test_verify_config_all_combinations() {
        for mask in 0..8u8 {
            let pick = |bit: u8| if mask & bit != 0 { "value" } else { "" };
            let creds = credentials(pick(1), pick(2), pick(4));
            assert_eq!(verify_config(&creds), mask == 7, "mask {:03b}", mask);
        }
    }

    #[test]
    fn test_verify_config_none_values() {
        assert!(!verify_config(&Credentials::default()));
    }

    #[test]
    fn test_whitespace_counts_as_absent() {
        let creds = credentials("  ", "token", "42");
        assert_eq!(creds.missing(), vec!["PRACTICUM_TOKEN"]);
    }

    #[test]
    fn test_from_args_reports_all_missing_credentials() {
        let args = Args {
            practicum_token: None,
            telegram_token: Some(String::new()),
            chat_id: None,
            ..full_args()
        };

        match Config::from_args(args) {
            Err(BotError::ConfigurationAbsent(missing)) => assert_eq!(
                missing,
                vec!["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "CHAT_ID"]
            ),
            other => panic!("expected ConfigurationAbsent, got {:?}", other),
        }
    }

    #[test]
    fn test_from_args_defaults() {
        let config = Config::from_args(full_args()).unwrap();
        assert_eq!(config.practicum_token, "practicum");
        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.chat_id, "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.from_date, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_args(full_args()).unwrap();

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.retry_period = Duration::ZERO;
        assert!(config.validate().is_err());
        config.retry_period = Duration::from_secs(1);

        config.from_date = -1;
        assert!(config.validate().is_err());
        config.from_date = 0;

        assert!(config.validate().is_ok());
    }
}
