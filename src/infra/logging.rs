pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Logs go to stderr: stdout carries MCP frames in stdio mode.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log a metrics-like line and feed the `metrics` facade.
pub fn log_metric(tool: &str, metric: &str, value: f64) {
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
    let tool = tool.to_owned();
    match metric {
        "request_latency_ms" => metrics::histogram!("wrike_request_latency_ms", "tool" => tool).record(value),
        "request_error_total" => metrics::counter!("wrike_request_errors_total", "tool" => tool).increment(1),
        _ => metrics::counter!("wrike_requests_total", "tool" => tool).increment(1),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }

    #[test]
    fn log_metric_without_recorder_is_a_noop() {
        super::log_metric("get_tasks", "request_latency_ms", 12.0);
        super::log_metric("get_tasks", "request_error_total", 1.0);
        super::log_metric("get_tasks", "request_total", 1.0);
    }
}
