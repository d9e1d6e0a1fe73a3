use std::io;
use tracing_subscriber::{fmt, EnvFilter};

// RUST_LOG wins; otherwise keep the http layers chatty enough to see
// each request land.
fn default_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Compact human-readable logs on stdout. Safe to call more than once;
/// later calls are no-ops.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(default_filter("info,tower_http=info,axum=info"))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// JSON logs on stdout, for container deployments where the stream is
/// shipped to a collector.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(default_filter("info"))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
