//! Process-wide logging setup shared by the shoplite binaries.
//!
//! Library crates only emit through the `tracing` macros; installing a
//! subscriber is the binary's job and happens exactly once, here.

pub mod tracing;

/// Initialize logging for the process.
///
/// Safe to call more than once; only the first call installs the
/// subscriber, later calls are no-ops.
pub fn init() {
    tracing::init();
}
