//! Error types for string operations.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use strata_arena::ArenaError;

/// Errors from string construction, formatting, and file ingestion.
///
/// "Not found" is not an error: searches return `Option` and cuts return
/// an empty second half.
#[derive(Debug)]
pub enum TextError {
    /// The output or scratch arena could not satisfy an allocation.
    Arena(ArenaError),
    /// A byte range reaches past the end of the string.
    OutOfRange {
        /// Requested start offset.
        pos: usize,
        /// Requested length.
        len: usize,
        /// Length of the string.
        available: usize,
    },
    /// Formatted output does not fit in the space available.
    FormatOverflow {
        /// Bytes available for the rendered text.
        limit: usize,
    },
    /// A `Display` implementation reported an error while formatting.
    Format,
    /// A file could not be inspected, opened, or fully read.
    Io {
        /// The file involved.
        path: PathBuf,
        /// Which step failed.
        op: IoOp,
        /// The underlying OS error.
        source: io::Error,
    },
}

/// The file-ingestion step that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoOp {
    /// Querying the file size.
    Metadata,
    /// Opening the file.
    Open,
    /// Reading the content.
    Read,
}

impl TextError {
    pub(crate) fn io(path: &Path, op: IoOp, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            op,
            source,
        }
    }
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata => write!(f, "stat"),
            Self::Open => write!(f, "open"),
            Self::Read => write!(f, "read"),
        }
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(err) => write!(f, "{err}"),
            Self::OutOfRange {
                pos,
                len,
                available,
            } => {
                write!(
                    f,
                    "range {pos}..{} out of bounds for string of length {available}",
                    pos.saturating_add(*len)
                )
            }
            Self::FormatOverflow { limit } => {
                write!(f, "formatted text exceeds the {limit} bytes available")
            }
            Self::Format => write!(f, "formatting trait implementation returned an error"),
            Self::Io { path, op, source } => {
                write!(f, "failed to {op} '{}': {source}", path.display())
            }
        }
    }
}

impl Error for TextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ArenaError> for TextError {
    fn from(err: ArenaError) -> Self {
        Self::Arena(err)
    }
}
