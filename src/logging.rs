//! Shared `tracing-subscriber` installer for binaries that want stderr
//! logs. The library itself only emits `tracing` events; nothing here runs
//! unless a binary opts in.
//!
//! Events never carry password, key, or payload content, only lengths and
//! outcomes, so turning logging up is safe.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Call once at startup; a second call panics like any double-installed
/// global subscriber would.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
