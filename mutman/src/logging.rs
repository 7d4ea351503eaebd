//! Development-time tracing for debugging the manager.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`. Operation
//! return values stay clean text for the invoking surface, so nothing here
//! is ever mixed into stdout.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=mutman=debug mutman survivors
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
