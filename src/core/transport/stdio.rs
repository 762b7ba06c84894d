//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended
//! mode.

use rmcp::ServiceExt;

use super::{TransportError, TransportResult};
use crate::core::McpServer;
use crate::logging;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the peer disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        logging::info("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        logging::info("STDIO transport finished");
        Ok(())
    }
}
