//! Sends one test message to the configured chat and exits.

use homework_status_bot::notify::send_message;
use homework_status_bot::{init_tracing, BotConfig, TelegramNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = BotConfig::from_env()?;
    let notifier = TelegramNotifier::from_config(&cfg);

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "homework-status-bot: notification probe".to_string());

    let delivery = send_message(&notifier, &text).await;
    if !delivery.is_sent() {
        anyhow::bail!("probe failed: {delivery:?}");
    }
    println!("notify-probe done");
    Ok(())
}
