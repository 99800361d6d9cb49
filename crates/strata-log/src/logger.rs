//! The arena-backed `log::Log` implementation.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record};
use strata_arena::Arena;
use strata_text::format_in;

use crate::config::{LoggerConfig, DEFAULT_ARENA_CAPACITY, DEFAULT_SCRATCH_CAPACITY};
use crate::error::LogError;

/// Name written at the start of each line for `level`.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Trace => "TRACE",
        Level::Debug => "DEBUG",
        Level::Info => "INFO",
        Level::Warn => "WARNING",
        Level::Error => "ERROR",
    }
}

struct LoggerState<W> {
    sink: W,
    arena: Arena,
    scratch: Arena,
}

/// Writes `LEVEL: file:line: message` lines to a sink.
///
/// Every line is formatted once, through a private scratchpad, into a
/// private output arena that is reset before each record. A line of up to
/// `arena_capacity - 1` bytes fits. A record whose line does not fit is
/// reported on stderr rather than written truncated.
pub struct ArenaLogger<W: Write + Send> {
    level: LevelFilter,
    state: Mutex<LoggerState<W>>,
}

impl<W: Write + Send> ArenaLogger<W> {
    /// A logger over `sink` with the default arena capacities.
    pub fn new(sink: W, level: LevelFilter) -> Self {
        Self::with_capacities(sink, level, DEFAULT_ARENA_CAPACITY, DEFAULT_SCRATCH_CAPACITY)
    }

    /// A logger over `sink` with explicit arena capacities.
    pub fn with_capacities(
        sink: W,
        level: LevelFilter,
        arena_capacity: usize,
        scratch_capacity: usize,
    ) -> Self {
        Self {
            level,
            state: Mutex::new(LoggerState {
                sink,
                arena: Arena::new(arena_capacity),
                scratch: Arena::new(scratch_capacity),
            }),
        }
    }

    /// Most verbose level this logger records.
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Format and write one line, bypassing the level filter.
    pub fn log_at(
        &self,
        level: Level,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> Result<(), LogError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let LoggerState {
            sink,
            arena,
            scratch,
        } = &mut *state;
        arena.reset();
        let arena = &*arena;
        let text = format_in!(arena, scratch, "{}: {}:{}: {}", level_name(level), file, line, args)?;
        sink.write_all(text.as_bytes())?;
        sink.write_all(b"\n")?;
        Ok(())
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .sink
    }
}

impl ArenaLogger<File> {
    /// A logger writing to the file named in `config`, truncating it first.
    pub fn open(config: &LoggerConfig) -> Result<Self, LogError> {
        config.validate()?;
        let file = File::create(&config.path).map_err(|source| LogError::Open {
            path: config.path.clone(),
            source,
        })?;
        Ok(Self::with_capacities(
            file,
            config.level,
            config.arena_capacity,
            config.scratch_capacity,
        ))
    }
}

impl<W: Write + Send> Log for ArenaLogger<W> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let file = record.file().unwrap_or("<unknown>");
        let line = record.line().unwrap_or(0);
        if let Err(err) = self.log_at(record.level(), file, line, *record.args()) {
            // The logger cannot log its own failure.
            let _ = writeln!(io::stderr(), "strata-log: dropped record from {file}:{line}: {err}");
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = state.sink.flush();
    }
}
