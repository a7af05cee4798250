// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: this crate at INFO, dependencies
/// (html5ever's tree builder is chatty) only at WARN.
const DEFAULT_FILTER: &str = "warn,selenium_report=info";

/// Installs the `tracing_subscriber` formatter for the command-line tool.
/// `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete (default filter '{}').", DEFAULT_FILTER);
}
