//! The logger installed as the process-wide `log` backend.
//!
//! Only one global logger can exist per process, so everything that
//! touches it lives in this single test.

use log::LevelFilter;
use strata_log::{init, LogError, LoggerConfig};
use tempfile::TempDir;

#[test]
fn init_routes_log_macros_to_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strata.log");
    init(LoggerConfig::new(LevelFilter::Info, &path)).unwrap();

    log::debug!("hidden");
    log::info!("visible {}", 1);
    log::warn!("careful");
    log::logger().flush();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("INFO: "));
    assert!(lines[0].ends_with(": visible 1"));
    assert!(lines[0].contains("global.rs:"));
    assert!(lines[1].starts_with("WARNING: "));

    let again = init(LoggerConfig::new(LevelFilter::Info, dir.path().join("other.log")));
    assert!(matches!(again, Err(LogError::AlreadyInitialized)));
}
