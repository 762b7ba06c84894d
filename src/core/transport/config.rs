//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[default]
    Stdio,
}

impl TransportConfig {
    /// Load the transport selection from the `MCP_TRANSPORT` environment
    /// variable. Unrecognized values fall back to stdio.
    pub fn from_env() -> Self {
        if let Ok(value) = std::env::var("MCP_TRANSPORT") {
            if value != "stdio" {
                crate::logging::warning(format!(
                    "Unsupported transport {value:?}, falling back to stdio"
                ));
            }
        }
        Self::Stdio
    }

    /// Human-readable description for startup logging.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Stdio => "stdio (stdin/stdout)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdio() {
        assert!(matches!(TransportConfig::default(), TransportConfig::Stdio));
    }

    #[test]
    fn test_description() {
        assert_eq!(TransportConfig::Stdio.description(), "stdio (stdin/stdout)");
    }
}
