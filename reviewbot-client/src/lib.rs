//! Reviewbot HTTP Clients
//!
//! Thin, typed clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework review status API
//! - [`TelegramClient`]: the Telegram Bot API, used to deliver notifications
//!
//! Both clients are built on a shared `reqwest::Client` configuration with a
//! bounded request timeout, so a hung call cannot stall the poll loop.
//!
//! # Example
//!
//! ```no_run
//! use reviewbot_client::PracticumClient;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PracticumClient::new(
//!     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!     "token",
//!     Duration::from_secs(10),
//! )?;
//!
//! let statuses = client.get_homework_statuses(0).await?;
//! println!("{}", statuses);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod practicum;
mod telegram;
#[cfg(test)]
mod test_server;

pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by both API clients
fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(error::transport)
}

/// Formats a secret for `Debug` output without revealing it
fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<empty>" } else { "<redacted>" }
}
