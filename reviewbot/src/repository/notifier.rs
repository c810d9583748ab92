//! Notification delivery

use async_trait::async_trait;
use reviewbot_client::{Result, TelegramClient};

/// Delivers text messages to the single configured recipient
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the recipient
    async fn notify(&self, text: &str) -> Result<()>;
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, text: &str) -> Result<()> {
        self.send_message(text).await
    }
}
