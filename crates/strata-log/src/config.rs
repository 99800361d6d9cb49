//! Logger configuration.

use std::path::PathBuf;

use log::LevelFilter;

use crate::error::LogError;

/// Default capacity of the per-record output arena, in bytes.
pub const DEFAULT_ARENA_CAPACITY: usize = 1024;

/// Default capacity of the formatting scratchpad, in bytes.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 1024;

/// Configuration for a file-backed [`ArenaLogger`](crate::ArenaLogger).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Most verbose level that is recorded.
    pub level: LevelFilter,
    /// Log file. Truncated when the logger is opened.
    pub path: PathBuf,
    /// Bytes available for one formatted line, terminator included.
    pub arena_capacity: usize,
    /// Bytes available for rendering before the copy into the line arena.
    pub scratch_capacity: usize,
}

impl LoggerConfig {
    /// Default capacities, writing records at `level` and above to `path`.
    pub fn new(level: LevelFilter, path: impl Into<PathBuf>) -> Self {
        Self {
            level,
            path: path.into(),
            arena_capacity: DEFAULT_ARENA_CAPACITY,
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
        }
    }

    /// Reject configurations that could never record a line.
    pub fn validate(&self) -> Result<(), LogError> {
        if self.arena_capacity == 0 {
            return Err(LogError::InvalidConfig {
                reason: "arena_capacity must be non-zero".into(),
            });
        }
        if self.scratch_capacity == 0 {
            return Err(LogError::InvalidConfig {
                reason: "scratch_capacity must be non-zero".into(),
            });
        }
        Ok(())
    }
}
