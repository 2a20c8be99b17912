//! Tracing subscriber setup.
//!
//! The subscriber is installed once at startup. Services never look it up; each
//! receives its own span (see [`crate::state::AppState::new`]).

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber using the configured filter and format.
///
/// `log_format` is `text` (human-readable, ANSI colors) or `json` (one object per line).
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
