//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILE_NAME: &str = "clide.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/clide/logs/`
/// Log level is controlled by `CLIDE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CLIDE_LOG=debug my-tool
/// CLIDE_LOG=clide_editor=trace my-tool
/// ```
pub fn init() -> Result<()> {
    init_in(&get_log_directory())
}

/// Initialize logging into an explicit directory.
///
/// Fails with [`Error::LoggingInit`] when a global subscriber is already set.
pub fn init_in(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);

    // Default to info, allow override via CLIDE_LOG
    let env_filter =
        EnvFilter::try_from_env("CLIDE_LOG").unwrap_or_else(|_| EnvFilter::new("clide=info,warn"));

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
        .map_err(|e| Error::LoggingInit(e.to_string()))?;

    tracing::info!("clide logging started in {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("clide").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_paths() {
        let dir = get_log_directory();
        assert!(dir.ends_with("clide/logs"));
    }

    // Only one test may install the global subscriber.
    #[test]
    fn test_init_in_creates_directory_and_rejects_second_init() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("nested").join("logs");

        init_in(&log_dir).unwrap();
        assert!(log_dir.is_dir());

        let err = init_in(&log_dir).unwrap_err();
        assert!(matches!(err, Error::LoggingInit(_)));
    }
}
