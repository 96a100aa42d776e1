use std::time::Duration;

use eventdesk_domain::{EventDeskError, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Subsequent calls are
/// no-ops.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let _ = if config.json { builder.json().try_init() } else { builder.compact().try_init() };
}

/// Log the outcome of a request with structured fields.
///
/// # Parameters
/// * `operation` - Logical operation identifier (e.g. `"events::create_event"`).
/// * `elapsed` - Duration the operation took.
/// * `success` - Whether the operation completed successfully.
#[inline]
pub fn log_request_execution(operation: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(operation, duration_ms, "request_execution_success");
    } else {
        warn!(operation, duration_ms, "request_execution_failure");
    }
}

/// Convert an `EventDeskError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &EventDeskError) -> &'static str {
    match error {
        EventDeskError::Database(_) => "database",
        EventDeskError::Config(_) => "config",
        EventDeskError::NotFound(_) => "not_found",
        EventDeskError::InvalidInput(_) => "invalid_input",
        EventDeskError::Internal(_) => "internal",
    }
}
