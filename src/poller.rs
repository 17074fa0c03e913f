// src/poller.rs
//! The poll loop: fetch, validate, translate, notify, sleep. Forever.

use std::time::Duration;

use metrics::{counter, gauge};

use crate::error::Result;
use crate::homework::{check_response, current_date, parse_status};
use crate::notify::{send_message, Delivery, ErrorReporter, Notifier, Report};
use crate::practicum::HomeworkSource;

/// Mutable state carried between cycles. Lives only as long as the process.
#[derive(Debug, Default)]
pub struct Session {
    watermark: i64,
    reporter: ErrorReporter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower bound for the next `from_date` query.
    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    /// Never moves backwards.
    fn advance(&mut self, date: i64) {
        if date > self.watermark {
            self.watermark = date;
            gauge!("poll_watermark").set(date as f64);
        }
    }
}

/// What a single cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Notified(Delivery),
    Failed(Report),
}

pub struct Poller<S, N> {
    source: S,
    notifier: N,
    retry_time: Duration,
    session: Session,
}

impl<S, N> Poller<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, retry_time: Duration) -> Self {
        Self {
            source,
            notifier,
            retry_time,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// One cycle without the trailing sleep. Never returns an error: failures
    /// are routed to the error reporter.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        crate::telemetry::ensure_described();
        counter!("poll_cycles_total").increment(1);

        match self.check_and_build_message().await {
            Ok(message) => CycleOutcome::Notified(send_message(&self.notifier, &message).await),
            Err(e) => {
                counter!("poll_failures_total").increment(1);
                let message = format!("Program malfunction: {e}");
                let report = self
                    .session
                    .reporter
                    .log_and_inform(&self.notifier, &message)
                    .await;
                CycleOutcome::Failed(report)
            }
        }
    }

    async fn check_and_build_message(&mut self) -> Result<String> {
        let response = self.source.fetch(self.session.watermark).await?;
        if let Some(date) = current_date(&response)? {
            self.session.advance(date);
        }
        let homework = check_response(&response)?;
        parse_status(&homework)
    }

    /// Run cycles until the process is killed.
    pub async fn run(&mut self) {
        tracing::info!(retry_secs = self.retry_time.as_secs(), "poll loop started");
        loop {
            let outcome = self.poll_once().await;
            tracing::debug!(?outcome, watermark = self.session.watermark, "cycle finished");
            tokio::time::sleep(self.retry_time).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watermark_is_monotonic() {
        let mut s = Session::new();
        assert_eq!(s.watermark(), 0);
        s.advance(100);
        s.advance(50);
        assert_eq!(s.watermark(), 100);
        s.advance(150);
        assert_eq!(s.watermark(), 150);
    }
}
