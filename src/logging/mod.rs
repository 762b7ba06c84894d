//! Centralized logging component.
//!
//! Every record is written synchronously to standard output and, when a
//! file sink is configured, appended to a UTF-8 log file with the same
//! fixed layout:
//!
//! ```text
//! 2026-08-24 12:00:00 | INFO     | tobe-mcp | main.rs:21 | Server event: startup
//! ```
//!
//! Components receive a [`Logger`] handle at construction time; free
//! functions backed by a lazily-built default logger exist for call
//! sites without one.

mod level;
mod logger;
mod registry;

pub use level::Level;
pub use logger::Logger;
pub use registry::{
    DEFAULT_LOGGER_NAME, critical, debug, default_log_path, error, exception, get_logger, info,
    setup_logging, warning,
};
