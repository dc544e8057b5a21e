// * Telemetry - JSON Logging and Prometheus Metrics
// * Provides structured logging and counters for the report pipeline

use lazy_static::lazy_static;
use prometheus::{register_counter_vec, CounterVec, Encoder, TextEncoder};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "gw_scout=info,warn";

lazy_static! {
    // * Outbound requests by kind (page|search) and outcome
    pub static ref FETCHES_TOTAL: CounterVec = register_counter_vec!(
        "gw_scout_fetches_total",
        "Outbound requests by kind and outcome",
        &["kind", "outcome"]
    ).unwrap();

    // * Tables whose structure did not match the expected layout
    pub static ref EXTRACTION_FAILURES_TOTAL: CounterVec = register_counter_vec!(
        "gw_scout_extraction_failures_total",
        "Extraction failures by table",
        &["table"]
    ).unwrap();

    // * Report blocks by outcome (emitted|partial|emit_failed)
    pub static ref REPORT_BLOCKS_TOTAL: CounterVec = register_counter_vec!(
        "gw_scout_report_blocks_total",
        "Report blocks by outcome",
        &["outcome"]
    ).unwrap();
}

/// Initializes the tracing subscriber with JSON formatting
///
/// # Example
/// ```ignore
/// use gw_scout::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(crew = "Knights", "Building report");
/// ```
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_target(false))
        .init();
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gw_scout=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .init();
}

pub fn record_fetch(kind: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    FETCHES_TOTAL.with_label_values(&[kind, outcome]).inc();
}

pub fn record_extraction_failure(table: &str) {
    EXTRACTION_FAILURES_TOTAL.with_label_values(&[table]).inc();
}

pub fn record_report_block(outcome: &str) {
    REPORT_BLOCKS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Renders every registered metric in the Prometheus text format
pub fn get_metrics_string() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_default()
}
