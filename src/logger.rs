//! File logging setup
//!
//! When logging is enabled in the configuration, log records are written to
//! a file under the platform data directory. Nothing is ever written to the
//! terminal itself, which stays reserved for the TUI.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Initialize file logging according to the configuration.
///
/// A no-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path()?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Logger already initialized")?;

    log::debug!("logging initialized, writing to {}", path.display());
    Ok(())
}

/// Resolve the log file path, creating the parent directory if needed.
fn log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
        .join("termnote");

    std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    Ok(dir.join("termnote.log"))
}
