//! Development-time tracing.
//!
//! Tracing output goes to stderr and is controlled by `RUST_LOG`. The console
//! lines `mdcat` prints (missing-file notices, the completion line) are product
//! output and are written regardless of the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Defaults to `warn` if `RUST_LOG` is unset.
///
/// # Example
/// ```bash
/// RUST_LOG=mdcat=debug mdcat combine
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
