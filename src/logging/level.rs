//! Severity levels for the logging component.

use serde::{Deserialize, Serialize};

/// Ordered log severity.
///
/// A record is emitted only if its level is at or above the logger's
/// configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// The uppercase display name of this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Parse a level from its textual name, case-insensitively.
    ///
    /// Unrecognized names map to `Info`; a bad level name must not keep
    /// the server from starting.
    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARNING" => Level::Warning,
            "ERROR" => Level::Error,
            "CRITICAL" => Level::Critical,
            _ => Level::Info,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() honors width flags so records can left-justify the level
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Level::from_name("debug"), Level::Debug);
        assert_eq!(Level::from_name("Debug"), Level::Debug);
        assert_eq!(Level::from_name("WARNING"), Level::Warning);
        assert_eq!(Level::from_name("critical"), Level::Critical);
        assert_eq!(Level::from_name("eRrOr"), Level::Error);
    }

    #[test]
    fn test_from_name_is_total() {
        assert_eq!(Level::from_name(""), Level::Info);
        assert_eq!(Level::from_name("verbose"), Level::Info);
        assert_eq!(Level::from_name("trace"), Level::Info);
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(format!("{:<8}", Level::Info), "INFO    ");
    }
}
