// src/practicum.rs
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{BotError, Result};

/// Anything that can answer "what changed since `from_date`".
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

pub struct PracticumClient {
    endpoint: String,
    token: String,
    client: Client,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        let rsp = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| BotError::ApiUnavailable(format!("request failed: {e}")))?;

        let status = rsp.status();
        if status != reqwest::StatusCode::OK {
            return Err(BotError::ApiUnavailable(format!("endpoint answered {status}")));
        }

        rsp.json::<Value>()
            .await
            .map_err(|e| BotError::MalformedResponse(format!("body is not JSON: {e}")))
    }
}
