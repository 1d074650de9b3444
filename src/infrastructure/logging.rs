//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact stderr subscriber filtered by `filter`
/// (e.g. `warn` or `aptledger::infrastructure::store=debug`).
/// An unparsable filter falls back to `warn`.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
