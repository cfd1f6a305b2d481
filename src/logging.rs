use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Env var that overrides the configured log level, e.g. `PALETTR_LOG=debug`.
const LOG_ENV: &str = "PALETTR_LOG";
const LOG_FILE: &str = "palettr.log";

/// Returns the log directory inside the user's data directory.
/// Falls back to the working directory when no data dir is found.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|data_dir| data_dir.join("palettr"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Sends `tracing` output to a file. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
pub fn init(level: &str) -> Result<()> {
    init_in(&default_log_dir(), level)
}

fn init_in(dir: &Path, level: &str) -> Result<()> {
    let appender = file_appender(dir)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

    tracing::debug!(dir = %dir.display(), "logging initialised");
    Ok(())
}

fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("palettr-{}-{name}", std::process::id()))
    }

    #[test]
    fn log_dir_blocked_by_a_file_is_an_error() {
        let blocker = scratch_path("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = init_in(&blocker.join("palettr"), "info").unwrap_err();
        assert!(format!("{err:#}").contains("failed to create log directory"));

        let err = file_appender(&blocker).unwrap_err();
        assert!(format!("{err:#}").contains("failed to create log directory"));

        std::fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn creates_missing_log_directory() {
        let dir = scratch_path("logs").join("nested");
        file_appender(&dir).unwrap();
        assert!(dir.join(LOG_FILE).exists());
        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
