//! Logging setup
//!
//! `RUST_LOG` takes precedence; otherwise the configured `log_level` is used.
//! Logs go to stderr unless a `log_file` is configured, which keeps them off
//! the terminal browser's alternate screen.

use crate::config::CookbookConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Build the log filter from the environment, falling back to `default_level`
///
/// An unparsable `default_level` falls back to `warn`.
#[must_use]
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// Calling it more than once is harmless: later calls are ignored.
///
/// # Errors
///
/// Returns `std::io::Error` if the configured log file cannot be opened.
pub fn init(config: &CookbookConfig) -> std::io::Result<()> {
    let filter = build_filter(&config.log_level);

    let result = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
    Ok(())
}
