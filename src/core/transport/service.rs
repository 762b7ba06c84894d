//! Transport service - unified entry point for starting the server.

use super::stdio::StdioTransport;
use super::{TransportConfig, TransportResult};
use crate::core::McpServer;
use crate::logging;

/// Manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Create a transport service from environment variables.
    pub fn from_env() -> Self {
        Self::new(TransportConfig::from_env())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Start the transport with the given MCP server.
    ///
    /// Blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        logging::info(format!(
            "Starting transport: {}",
            self.config.description()
        ));

        match self.config {
            TransportConfig::Stdio => StdioTransport::run(server).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_carries_configuration() {
        let service = TransportService::new(TransportConfig::Stdio);
        assert!(matches!(service.config(), TransportConfig::Stdio));
    }
}
