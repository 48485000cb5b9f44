//! Metrics collection and Prometheus export.
//!
//! Installs the global `metrics` recorder and renders it for `/metrics`.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Later calls are no-ops.
pub fn init_metrics() -> anyhow::Result<()> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;

    // A concurrent initializer may have won; either handle renders the same registry.
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count one agent run by task, template and outcome status.
pub fn record_agent_run(task: &'static str, template: &'static str, outcome: &'static str) {
    counter!(
        "agent_runs_total",
        "task" => task,
        "template" => template,
        "outcome" => outcome
    )
    .increment(1);
}

/// Record latency of one provider call.
pub fn record_provider_call(provider: &'static str, outcome: &'static str, elapsed: Duration) {
    histogram!(
        "provider_request_duration_seconds",
        "provider" => provider,
        "outcome" => outcome
    )
    .record(elapsed.as_secs_f64());
}

/// Count provider tokens by direction.
pub fn record_tokens(provider: &'static str, input_tokens: i32, output_tokens: i32) {
    counter!("provider_tokens_total", "provider" => provider, "type" => "input")
        .increment(input_tokens.max(0) as u64);
    counter!("provider_tokens_total", "provider" => provider, "type" => "output")
        .increment(output_tokens.max(0) as u64);
}
