// src/telemetry.rs
use std::net::SocketAddr;

use anyhow::{Context, Result};
use metrics::{describe_counter, describe_gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Install the Prometheus recorder with its own HTTP listener serving `/metrics` on `addr`.
/// Must be called from inside a tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("prometheus: install exporter")?;
    describe_all();
    Ok(())
}

/// Install the Prometheus recorder without a listener; render through the handle.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("prometheus: install recorder")?;
    describe_all();
    Ok(handle)
}

/// One-time metrics registration.
pub(crate) fn ensure_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(describe_all);
}

fn describe_all() {
    describe_counter!("poll_cycles_total", "Poll cycles started.");
    describe_counter!("poll_failures_total", "Poll cycles that ended in an error.");
    describe_counter!("notifications_sent_total", "Chat messages delivered.");
    describe_counter!("notifications_failed_total", "Chat deliveries that failed.");
    describe_counter!(
        "error_reports_suppressed_total",
        "Error reports not re-sent because the same text was already delivered."
    );
    describe_gauge!("poll_watermark", "Current from_date watermark (unix seconds).");
}
