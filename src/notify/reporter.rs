// src/notify/reporter.rs
use std::collections::HashSet;

use metrics::counter;

use super::{send_message, Delivery, Notifier};

/// What happened to an error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Logged and delivered to the chat for the first time.
    Delivered,
    /// Logged only; the same text already reached the chat.
    Suppressed,
    /// Logged; the chat delivery attempt failed and will be retried next time.
    DeliveryFailed(String),
}

/// Logs errors and forwards each distinct message to the chat at most once.
/// The set of delivered messages only grows.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    sent: HashSet<String>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn already_sent(&self, message: &str) -> bool {
        self.sent.contains(message)
    }

    pub fn sent_count(&self) -> usize {
        self.sent.len()
    }

    pub async fn log_and_inform(&mut self, notifier: &dyn Notifier, message: &str) -> Report {
        tracing::error!("{message}");
        if self.already_sent(message) {
            counter!("error_reports_suppressed_total").increment(1);
            return Report::Suppressed;
        }
        match send_message(notifier, message).await {
            Delivery::Sent => {
                self.sent.insert(message.to_string());
                Report::Delivered
            }
            Delivery::Failed(reason) => {
                tracing::info!("could not deliver error report: {reason}");
                Report::DeliveryFailed(reason)
            }
        }
    }
}
