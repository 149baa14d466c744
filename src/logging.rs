//! Tracing subscriber setup.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Log file used by the terminal UI when none is configured.
pub const DEFAULT_TUI_LOG_FILE: &str = "tictactoe_tui.log";

/// `RUST_LOG` if set, the configured directive otherwise.
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter()))
}

/// Sends logs to `path`, never to the terminal.
pub fn init_file(config: &LogConfig, path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    // Don't fail if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to the configured file, or stderr if there is none.
pub fn init(config: &LogConfig) -> Result<()> {
    match config.file() {
        Some(path) => init_file(config, path),
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(config))
                .with_writer(std::io::stderr)
                .try_init();
            Ok(())
        }
    }
}
