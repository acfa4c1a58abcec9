//! Logging init: tracing to stderr with env-filter.
//!
//! Per-page progress and error lines are emitted through `tracing`; summary
//! output meant for the user goes to stdout in the CLI instead.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default
/// filter. Call once, before any other work.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wpd_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
