//! Diagnostic logging.
//!
//! The TUI owns stdout, so `tracing` records are written to a file in the
//! configured log directory. When the file cannot be opened the application
//! runs without a subscriber.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::error::{ChatError, ChatResult};

pub const LOG_FILE_NAME: &str = "flash-chat.log";

pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

/// Create `dir` if needed and open the log file in append mode.
pub fn open_log_file(dir: &Path) -> ChatResult<File> {
    fs::create_dir_all(dir).map_err(|source| ChatError::Logging {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = log_file_path(dir);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ChatError::Logging { path, source })
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global file subscriber.
///
/// Returns the log file path on success, `None` when logging is disabled.
pub fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let dir = config.resolved_log_dir()?;
    // No subscriber yet and stdout belongs to the TUI, so a failure is dropped.
    let file = open_log_file(&dir).ok()?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(layer)
        .with(build_filter(&config.log_level))
        .try_init()
        .ok()?;

    Some(log_file_path(&dir))
}
