// src/error.rs
use thiserror::Error;

/// Every failure the bot distinguishes.
///
/// `ConfigurationMissing` is fatal at startup, `NotificationDelivery` never
/// leaves the notify layer; all other kinds are caught by the poll loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BotError {
    #[error("API endpoint unavailable: {0}")]
    ApiUnavailable(String),

    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    #[error("key `{0}` is missing in the API response")]
    MissingField(&'static str),

    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    #[error("required environment variable {0} is not set")]
    ConfigurationMissing(&'static str),

    #[error("notification delivery failed: {0}")]
    NotificationDelivery(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
