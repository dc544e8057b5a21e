// * Operations: structured logging and process-wide counters

pub mod telemetry;

pub use telemetry::{
    get_metrics_string, init_tracing, init_tracing_pretty, record_extraction_failure,
    record_fetch, record_report_block,
};
