//! Tracing subscriber configuration.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: compact human-readable lines, filtered
/// through `RUST_LOG` with `info` as the fallback level. The demo binary
/// is a console walkthrough, so output stays plain text rather than JSON.
///
/// `try_init` keeps repeated calls harmless: whoever installs first wins
/// and everyone else silently reuses that subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
