//! Log subscriber setup
//!
//! Logs go to stderr so stdout carries only calculator output.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Builds the filter for a verbosity level
///
/// `RUST_LOG` wins over the `-v` count, except in quiet mode.
#[must_use]
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    if verbosity.is_quiet() {
        return EnvFilter::new(verbosity.log_directive());
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber, as plain text or JSON lines
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: Verbosity, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_verbose());

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_ok() {
        tracing::debug!(?verbosity, json, "logging initialised");
    }
}
