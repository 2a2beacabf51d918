//! Diagnostic logging
//!
//! Structured events go to stderr through `tracing`. Events name operations
//! and account identifiers only; amounts and balances are never logged.
//!
//! The filter comes from `TELLER_LOG`, then `RUST_LOG`, and defaults to
//! `warn` so the console transcript stays readable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "TELLER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize the process-wide subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
