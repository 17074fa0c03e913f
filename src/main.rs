//! Homework status bot: polls the Practicum API and relays review status
//! changes to a Telegram chat.

use homework_status_bot::{
    init_tracing, telemetry, BotConfig, Poller, PracticumClient, TelegramNotifier,
};

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op when the file is absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = match BotConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(critical = true, "environment variable problem: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(?cfg, "configuration loaded");

    if let Some(addr) = cfg.metrics_addr {
        match telemetry::install_exporter(addr) {
            Ok(()) => tracing::info!(%addr, "prometheus exporter listening"),
            Err(e) => tracing::warn!("metrics disabled: {e:#}"),
        }
    }

    let source = PracticumClient::new(cfg.endpoint.clone(), cfg.practicum_token.clone());
    let notifier = TelegramNotifier::from_config(&cfg);

    Poller::new(source, notifier, cfg.retry_time).run().await;
}
