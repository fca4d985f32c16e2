//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/telemetry. Host applications can install their own
/// subscriber; this helper installs an env-filtered fmt subscriber if none is
/// set, defaulting to info-level events from this crate.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("riftline=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
