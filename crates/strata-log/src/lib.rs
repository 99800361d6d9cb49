//! Arena-backed logging for Strata.
//!
//! [`ArenaLogger`] implements [`log::Log`] by formatting each record
//! through [`strata_text::format_in!`] into a private arena and writing
//! `LEVEL: file:line: message` lines to its sink. [`init`] installs a
//! file-backed logger as the process-wide `log` backend.
//!
//! ```no_run
//! use log::LevelFilter;
//! use strata_log::LoggerConfig;
//!
//! strata_log::init(LoggerConfig::new(LevelFilter::Info, "app.log")).unwrap();
//! log::warn!("low on space");
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod logger;

pub use config::{LoggerConfig, DEFAULT_ARENA_CAPACITY, DEFAULT_SCRATCH_CAPACITY};
pub use error::LogError;
pub use logger::{level_name, ArenaLogger};

/// Install a file-backed [`ArenaLogger`] as the global `log` backend.
///
/// Fails if the configuration is invalid, the file cannot be created, or
/// another logger is already installed.
pub fn init(config: LoggerConfig) -> Result<(), LogError> {
    let logger = ArenaLogger::open(&config)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(config.level);
    Ok(())
}
