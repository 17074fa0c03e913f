pub mod reporter;
pub mod telegram;

use anyhow::Result;
use metrics::counter;

use crate::error::BotError;

pub use reporter::{ErrorReporter, Report};
pub use telegram::TelegramNotifier;

/// Outbound chat channel. Implementations return errors; callers go through
/// [`send_message`] which never propagates them.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Outcome of a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed(String),
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent)
    }
}

/// Send `text` once, log the result and swallow any failure.
pub async fn send_message(notifier: &dyn Notifier, text: &str) -> Delivery {
    crate::telemetry::ensure_described();
    match notifier.send(text).await {
        Ok(()) => {
            tracing::info!("sent message: \"{text}\"");
            counter!("notifications_sent_total").increment(1);
            Delivery::Sent
        }
        Err(e) => {
            let err = BotError::NotificationDelivery(format!("{e:#}"));
            tracing::error!("{err}");
            counter!("notifications_failed_total").increment(1);
            Delivery::Failed(err.to_string())
        }
    }
}
