use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder
///
/// Fails if a recorder is already installed (only one per process).
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "pricing_calculations_total",
        "Total number of cost calculations"
    );
    describe_counter!(
        "pricing_cache_lookups_total",
        "Price cache lookups by result (hit or miss)"
    );
    describe_counter!(
        "pricing_errors_total",
        "Total number of error responses"
    );
    describe_gauge!(
        "pricing_cache_entries",
        "Number of entries in the price cache"
    );
    describe_gauge!(
        "pricing_service_info",
        "Service version information"
    );

    gauge!("pricing_service_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

pub fn record_calculation(provider: &str, source: &str) {
    counter!(
        "pricing_calculations_total",
        "provider" => provider.to_string(),
        "source" => source.to_string(),
    )
    .increment(1);
}

pub fn record_cache_lookup(result: &'static str) {
    counter!("pricing_cache_lookups_total", "result" => result).increment(1);
}

pub fn record_error(error_type: &'static str) {
    counter!("pricing_errors_total", "error_type" => error_type).increment(1);
}

pub fn set_cache_entries(entries: usize) {
    gauge!("pricing_cache_entries").set(entries as f64);
}
