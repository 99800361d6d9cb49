//! Error types for the logger.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use strata_text::TextError;

/// Errors from setting up the logger or recording a line.
#[derive(Debug)]
pub enum LogError {
    /// The configuration was rejected by [`LoggerConfig::validate`](crate::LoggerConfig::validate).
    InvalidConfig {
        /// Which constraint was violated.
        reason: String,
    },
    /// The log file could not be created.
    Open {
        /// The file involved.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
    /// A logger was already installed for this process.
    AlreadyInitialized,
    /// The line could not be formatted in the logger's arenas.
    Format(TextError),
    /// The sink rejected the line.
    Write(io::Error),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid logger config: {reason}"),
            Self::Open { path, source } => {
                write!(f, "failed to open log file '{}': {source}", path.display())
            }
            Self::AlreadyInitialized => write!(f, "a global logger is already installed"),
            Self::Format(err) => write!(f, "failed to format log line: {err}"),
            Self::Write(err) => write!(f, "failed to write log line: {err}"),
        }
    }
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Format(err) => Some(err),
            Self::Write(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TextError> for LogError {
    fn from(err: TextError) -> Self {
        Self::Format(err)
    }
}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        Self::Write(err)
    }
}

impl From<log::SetLoggerError> for LogError {
    fn from(_: log::SetLoggerError) -> Self {
        Self::AlreadyInitialized
    }
}
