use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while starting or tearing down the shell.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("terminal error: {message}")]
    Terminal { message: String },

    #[error("invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[error("cannot open log file {path}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChatError {
    /// Short code used in log records.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChatError::Terminal { .. } => "E_TERMINAL",
            ChatError::Config { .. } => "E_CONFIG",
            ChatError::Logging { .. } => "E_LOGGING",
            ChatError::Io(_) => "E_IO",
        }
    }

    /// Whether the application can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ChatError::Logging { .. })
    }

    /// First `ChatError` in the source chain of `err`.
    pub fn find_in<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a ChatError> {
        std::iter::successors(Some(err), |cause| cause.source())
            .find_map(|cause| cause.downcast_ref::<ChatError>())
    }

    pub(crate) fn terminal(err: impl std::fmt::Display) -> Self {
        ChatError::Terminal {
            message: err.to_string(),
        }
    }
}
