//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Application directory name used under the platform data/config roots
pub const APP_DIR_NAME: &str = "scholar-folio";

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "FOLIO_LOG";

const LOG_FILE_NAME: &str = "folio.log";
const DEFAULT_FILTER: &str = "scholar_folio=info,folio_app=info,folio_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/scholar-folio/logs/` so the terminal
/// UI is never disturbed. Log level is controlled by `FOLIO_LOG`.
///
/// # Examples
/// ```bash
/// FOLIO_LOG=debug folio
/// FOLIO_LOG=folio_app=trace folio
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::config(format!("Failed to install log subscriber: {}", e)))?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Scholar Folio starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join(APP_DIR_NAME).join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_dir() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with(PathBuf::from(APP_DIR_NAME).join("logs").join("folio.log")));
    }
}
