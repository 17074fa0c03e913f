// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod config;
pub mod error;
pub mod homework;
pub mod notify;
pub mod poller;
pub mod practicum;
pub mod telemetry;

pub use crate::config::BotConfig;
pub use crate::error::BotError;
pub use crate::notify::{Notifier, TelegramNotifier};
pub use crate::poller::{CycleOutcome, Poller, Session};
pub use crate::practicum::{HomeworkSource, PracticumClient};

/// Init compact stdout logging: timestamp, level, message.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
