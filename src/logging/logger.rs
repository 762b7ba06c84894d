//! Logger construction and the leveled logging facade.
//!
//! A `Logger` always writes formatted records to standard output and,
//! when constructed with a file path, appends the same records to that
//! file. File-sink setup failure is never fatal: it is reported once on
//! the console sink and the logger continues console-only.
//!
//! Record layout, shared by all sinks:
//!
//! ```text
//! 2026-08-24 12:00:00 | INFO     | tobe-mcp | server.rs:42 | message
//! ```

use std::fmt::{Display, Write as _};
use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::panic::Location;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use serde_json::Value;

use super::Level;

/// A named logger with a console sink and an optional file sink.
pub struct Logger {
    name: String,
    level: Level,
    file: Option<Mutex<File>>,
}

impl Logger {
    /// Create a logger emitting records at or above `level`.
    ///
    /// When `log_file` is given, its parent directory is created
    /// recursively and the file is opened for append. On failure the
    /// logger degrades to console-only output.
    #[track_caller]
    pub fn new(name: impl Into<String>, level: Level, log_file: Option<&Path>) -> Self {
        let mut logger = Self {
            name: name.into(),
            level,
            file: None,
        };

        if let Some(path) = log_file {
            match open_log_file(path) {
                Ok(file) => logger.file = Some(Mutex::new(file)),
                Err(e) => logger.error(format!(
                    "Failed to setup file logging at {}: {e}",
                    path.display()
                )),
            }
        }

        logger
    }

    /// The logger's name, as it appears in every record.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The minimum severity this logger emits.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether a file sink is attached.
    pub fn has_file_sink(&self) -> bool {
        self.file.is_some()
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, Location::caller(), &message.to_string());
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, Location::caller(), &message.to_string());
    }

    #[track_caller]
    pub fn warning(&self, message: impl Display) {
        self.log(Level::Warning, Location::caller(), &message.to_string());
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, Location::caller(), &message.to_string());
    }

    #[track_caller]
    pub fn critical(&self, message: impl Display) {
        self.log(Level::Critical, Location::caller(), &message.to_string());
    }

    /// Error-level record carrying the propagating error and its source chain.
    #[track_caller]
    pub fn exception(&self, message: impl Display, error: &(dyn std::error::Error + 'static)) {
        let mut detail = format!("{message}: {error}");
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(detail, " | Caused by: {cause}");
            source = cause.source();
        }
        self.log(Level::Error, Location::caller(), &detail);
    }

    /// Record the outcome of a tool invocation.
    #[track_caller]
    pub fn log_tool_call(
        &self,
        tool_name: &str,
        arguments: &Value,
        success: bool,
        duration: Option<f64>,
    ) {
        let message = tool_call_message(tool_name, arguments, success, duration);
        self.log(Level::Info, Location::caller(), &message);
    }

    /// Record a server lifecycle event.
    #[track_caller]
    pub fn log_server_event(&self, event: &str, details: Option<&Value>) {
        let message = server_event_message(event, details);
        self.log(Level::Info, Location::caller(), &message);
    }

    /// Record the duration of an operation.
    #[track_caller]
    pub fn log_performance(&self, operation: &str, duration: f64, additional_info: Option<&Value>) {
        let message = performance_message(operation, duration, additional_info);
        self.log(Level::Info, Location::caller(), &message);
    }

    /// Emit one formatted record to every attached sink.
    ///
    /// Sink write errors are swallowed: logging is fire-and-forget and
    /// must never fail the caller's operation.
    fn log(&self, level: Level, location: &Location<'_>, message: &str) {
        if level < self.level {
            return;
        }

        let record = format_record(&self.name, level, location, message);

        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{record}");
        drop(stdout);

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{record}");
            }
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("file_sink", &self.file.is_some())
            .finish()
    }
}

/// Create the parent directory and open the log file for append.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build one record line: `timestamp | level | name | file:line | message`.
fn format_record(name: &str, level: Level, location: &Location<'_>, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let source = source_file(location.file());
    format!(
        "{timestamp} | {level:<8} | {name} | {source}:{line} | {message}",
        line = location.line()
    )
}

/// Basename of the source file recorded by `Location`.
fn source_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn tool_call_message(
    tool_name: &str,
    arguments: &Value,
    success: bool,
    duration: Option<f64>,
) -> String {
    let status = if success { "SUCCESS" } else { "FAILED" };
    let duration = duration
        .map(|d| format!(" ({d:.3}s)"))
        .unwrap_or_default();
    format!("Tool call: {tool_name} | Status: {status} | Args: {arguments}{duration}")
}

fn server_event_message(event: &str, details: Option<&Value>) -> String {
    match details {
        Some(details) => format!("Server event: {event} | Details: {details}"),
        None => format!("Server event: {event}"),
    }
}

fn performance_message(operation: &str, duration: f64, additional_info: Option<&Value>) -> String {
    match additional_info {
        Some(info) => format!("Performance: {operation} | Duration: {duration:.3}s | Info: {info}"),
        None => format!("Performance: {operation} | Duration: {duration:.3}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_console_only_logger() {
        let logger = Logger::new("test", Level::Info, None);
        assert_eq!(logger.name(), "test");
        assert_eq!(logger.level(), Level::Info);
        assert!(!logger.has_file_sink());
    }

    #[test]
    fn test_file_sink_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("nested").join("deep").join("test.log");

        let logger = Logger::new("test", Level::Debug, Some(&log_path));

        assert!(logger.has_file_sink());
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_file_sink_receives_records() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new("file-test", Level::Info, Some(&log_path));
        logger.info("hello from the file sink");

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("| INFO     | file-test |"));
        assert!(contents.contains("| hello from the file sink"));
        assert!(contents.contains("logger.rs:"));
    }

    #[test]
    fn test_file_sink_failure_degrades_to_console_only() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is needed makes create_dir_all fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let log_path = blocker.join("sub").join("test.log");

        let logger = Logger::new("degraded", Level::Info, Some(&log_path));

        assert!(!logger.has_file_sink());
        // Still usable.
        logger.info("still alive");
    }

    #[test]
    fn test_level_filtering() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("filtered.log");

        let logger = Logger::new("filter", Level::Warning, Some(&log_path));
        logger.debug("dropped");
        logger.info("dropped too");
        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "");

        logger.warning("kept");
        logger.critical("kept as well");
        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("| WARNING  | filter |"));
        assert!(contents.contains("| CRITICAL | filter |"));
        assert!(!contents.contains("dropped"));
    }

    #[test]
    fn test_record_layout() {
        let record = format_record("layout", Level::Error, Location::caller(), "boom");
        let fields: Vec<&str> = record.split(" | ").collect();
        assert_eq!(fields.len(), 5);

        // YYYY-MM-DD HH:MM:SS
        assert_eq!(fields[0].len(), 19);
        assert_eq!(&fields[0][4..5], "-");
        assert_eq!(&fields[0][10..11], " ");
        assert_eq!(&fields[0][13..14], ":");

        // Level left-justified to 8 chars.
        assert_eq!(fields[1], "ERROR   ");

        assert_eq!(fields[2], "layout");
        assert!(fields[3].starts_with("logger.rs:"));
        assert_eq!(fields[4], "boom");
    }

    #[test]
    fn test_source_file_basename() {
        assert_eq!(source_file("src/logging/logger.rs"), "logger.rs");
        assert_eq!(source_file("src\\logging\\logger.rs"), "logger.rs");
        assert_eq!(source_file("logger.rs"), "logger.rs");
    }

    #[test]
    fn test_tool_call_message_success_with_duration() {
        let message = tool_call_message("search", &json!({"q": "x"}), true, Some(0.125));
        assert!(message.contains("search"));
        assert!(message.contains("SUCCESS"));
        assert!(message.contains(r#""q""#));
        assert!(message.contains(r#""x""#));
        assert!(message.contains("(0.125s)"));
    }

    #[test]
    fn test_tool_call_message_failure_without_duration() {
        let message = tool_call_message("search", &json!({"q": "x"}), false, None);
        assert!(message.contains("FAILED"));
        assert!(!message.contains("("));
    }

    #[test]
    fn test_server_event_message() {
        let plain = server_event_message("startup", None);
        assert_eq!(plain, "Server event: startup");

        let detailed = server_event_message("startup", Some(&json!({"transport": "stdio"})));
        assert!(detailed.starts_with("Server event: startup | Details: "));
        assert!(detailed.contains("stdio"));
    }

    #[test]
    fn test_performance_message() {
        let plain = performance_message("render", 1.5, None);
        assert_eq!(plain, "Performance: render | Duration: 1.500s");

        let detailed = performance_message("render", 0.0333333, Some(&json!({"prompt": "design"})));
        assert!(detailed.contains("Duration: 0.033s"));
        assert!(detailed.contains("design"));
    }

    #[test]
    fn test_exception_logs_source_chain() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("exception.log");
        let logger = Logger::new("exception", Level::Info, Some(&log_path));

        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let outer = crate::domains::prompts::PromptError::internal(format!("render failed: {inner}"));
        logger.exception("prompt rendering aborted", &outer);

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("| ERROR    |"));
        assert!(contents.contains("prompt rendering aborted"));
        assert!(contents.contains("render failed"));
    }
}
