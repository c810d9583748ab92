//! Telegram Bot API client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{self, ClientError, Result};

/// Client that sends text messages to a single chat
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// Recipient chat
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Bot API client
    ///
    /// # Arguments
    /// * `base_url` - Bot API base URL
    /// * `token` - Bot token
    /// * `chat_id` - Chat that receives every message
    /// * `timeout` - Upper bound for a single request
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self::with_client(
            base_url,
            token,
            chat_id,
            crate::http_client(timeout)?,
        ))
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the recipient chat
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Send a text message to the configured chat
    ///
    /// # Errors
    /// * [`ClientError::Transport`] if the request does not complete
    /// * [`ClientError::DeliveryFailed`] if the Bot API rejects the message
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(error::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(error::transport)?;

        match serde_json::from_str::<BotApiResponse>(&body) {
            Ok(reply) if status.is_success() && reply.ok => {
                debug!("Message delivered to chat {}", self.chat_id);
                Ok(())
            }
            Ok(reply) => Err(ClientError::DeliveryFailed(format!(
                "status {}: {}",
                status.as_u16(),
                reply.description.unwrap_or_else(|| "no description".to_string())
            ))),
            Err(_) => Err(ClientError::DeliveryFailed(format!(
                "status {}: unreadable Bot API response",
                status.as_u16()
            ))),
        }
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &crate::redact(&self.token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
