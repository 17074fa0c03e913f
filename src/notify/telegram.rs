use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

use super::Notifier;
use crate::config::BotConfig;

/// Bot API `sendMessage` to one fixed chat.
pub struct TelegramNotifier {
    api_base: String,
    token: String,
    chat_id: String,
    client: Client,
}

impl TelegramNotifier {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            token: token.into(),
            chat_id: chat_id.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(cfg: &BotConfig) -> Self {
        Self::new(
            cfg.telegram_api_base.clone(),
            cfg.telegram_token.clone(),
            cfg.telegram_chat_id.clone(),
        )
    }

    fn url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base.trim_end_matches('/'), self.token)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        // reqwest errors carry the URL, which contains the bot token.
        self.client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("telegram post")?
            .error_for_status()
            .map_err(|e| e.without_url())
            .context("telegram non-2xx")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}
