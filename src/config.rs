// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{BotError, Result};

pub const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_ENDPOINT: &str = "PRACTICUM_ENDPOINT";
pub const ENV_RETRY_TIME: &str = "RETRY_TIME_SECS";
pub const ENV_TELEGRAM_API_BASE: &str = "TELEGRAM_API_BASE";
pub const ENV_METRICS_ADDR: &str = "METRICS_ADDR";

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;
pub const DEFAULT_METRICS_ADDR: &str = "127.0.0.1:9000";

#[derive(Clone)]
pub struct BotConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_base: String,
    pub retry_time: Duration,
    /// Prometheus listener; `None` when `METRICS_ADDR=off`.
    pub metrics_addr: Option<SocketAddr>,
}

// Tokens stay out of logs.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_base", &self.telegram_api_base)
            .field("retry_time", &self.retry_time)
            .field("metrics_addr", &self.metrics_addr)
            .finish_non_exhaustive()
    }
}

impl BotConfig {
    /// Read configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(BotError::ConfigurationMissing(key));

        let practicum_token = required(ENV_PRACTICUM_TOKEN)?;
        let telegram_token = required(ENV_TELEGRAM_TOKEN)?;
        let telegram_chat_id = required(ENV_TELEGRAM_CHAT_ID)?;

        let retry_secs = get(ENV_RETRY_TIME)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_TIME_SECS);

        let default_metrics_addr = DEFAULT_METRICS_ADDR.parse::<SocketAddr>().ok();
        let metrics_addr = match get(ENV_METRICS_ADDR) {
            Some(v) if v.eq_ignore_ascii_case("off") => None,
            Some(v) => v.parse::<SocketAddr>().ok().or(default_metrics_addr),
            None => default_metrics_addr,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: get(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_base: get(ENV_TELEGRAM_API_BASE)
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            retry_time: Duration::from_secs(retry_secs),
            metrics_addr,
        })
    }
}
