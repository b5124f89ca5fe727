// src/services/webhook.rs

//! Webhook delivery client.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};

/// Delivery seam for chat notifications.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Deliver a message. A non-success response surfaces as an error.
    async fn deliver(&self, message: &str) -> Result<()>;
}

/// Discord-compatible webhook: POSTs a `{content, username}` JSON payload.
pub struct DiscordWebhook {
    client: Client,
    url: String,
    username: String,
}

impl DiscordWebhook {
    /// Create a webhook client posting to the given destination URL.
    pub fn new(client: Client, url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            username: username.into(),
        }
    }

    fn payload(&self, message: &str) -> serde_json::Value {
        serde_json::json!({
            "content": message,
            "username": self.username,
        })
    }
}

#[async_trait]
impl WebhookClient for DiscordWebhook {
    async fn deliver(&self, message: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&self.payload(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::webhook(format!("{status} from webhook endpoint")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let hook = DiscordWebhook::new(
            Client::new(),
            "https://example.com/hook",
            "RedTail - Seat Monitor",
        );

        let payload = hook.payload("**CSE-571 discovered:** hello");
        assert_eq!(payload["content"], "**CSE-571 discovered:** hello");
        assert_eq!(payload["username"], "RedTail - Seat Monitor");
    }
}
