//! Logger registry and module-level convenience functions.
//!
//! `get_logger` is the main entry point; `setup_logging` adds textual
//! level parsing for bootstrap code. The free leveled functions share one
//! lazily-constructed default logger for call sites that do not carry a
//! logger handle.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::OnceLock;

use super::{Level, Logger};

/// Name of the default process-wide logger.
pub const DEFAULT_LOGGER_NAME: &str = "tobe-mcp";

/// Default log file location, relative to the working directory.
pub fn default_log_path() -> PathBuf {
    PathBuf::from("logs").join(format!("{DEFAULT_LOGGER_NAME}.log"))
}

/// Build a fully configured logger.
///
/// When `log_file` is `None` the default location under `logs/` is used.
pub fn get_logger(name: &str, level: Level, log_file: Option<PathBuf>) -> Logger {
    let log_file = log_file.unwrap_or_else(default_log_path);
    Logger::new(name, level, Some(log_file.as_path()))
}

/// Build the default-named logger from a textual level.
///
/// The level name is case-insensitive; unrecognized names fall back to
/// `Info`.
pub fn setup_logging(level: &str, log_file: Option<PathBuf>) -> Logger {
    get_logger(DEFAULT_LOGGER_NAME, Level::from_name(level), log_file)
}

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared default logger, constructed once on first use.
fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| get_logger(DEFAULT_LOGGER_NAME, Level::Info, None))
}

#[track_caller]
pub fn debug(message: impl Display) {
    default_logger().debug(message);
}

#[track_caller]
pub fn info(message: impl Display) {
    default_logger().info(message);
}

#[track_caller]
pub fn warning(message: impl Display) {
    default_logger().warning(message);
}

#[track_caller]
pub fn error(message: impl Display) {
    default_logger().error(message);
}

#[track_caller]
pub fn critical(message: impl Display) {
    default_logger().critical(message);
}

#[track_caller]
pub fn exception(message: impl Display, err: &(dyn std::error::Error + 'static)) {
    default_logger().exception(message, err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_logger_defaults_file_path() {
        let logger = get_logger("registry-test", Level::Debug, None);
        assert_eq!(logger.name(), "registry-test");
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.has_file_sink());
    }

    #[test]
    fn test_setup_logging_parses_level() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("setup.log");

        let logger = setup_logging("warning", Some(log_path));
        assert_eq!(logger.name(), DEFAULT_LOGGER_NAME);
        assert_eq!(logger.level(), Level::Warning);
    }

    #[test]
    fn test_setup_logging_unknown_level_defaults_to_info() {
        let dir = tempfile::tempdir().unwrap();
        let logger = setup_logging("chatty", Some(dir.path().join("setup.log")));
        assert_eq!(logger.level(), Level::Info);
    }

    #[test]
    fn test_default_logger_is_singleton() {
        let first = default_logger();
        let second = default_logger();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_default_log_path() {
        let path = default_log_path();
        assert_eq!(path, PathBuf::from("logs/tobe-mcp.log"));
    }
}
