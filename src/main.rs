//! MCP Server Entry Point
//!
//! Loads configuration, sets up logging, and starts the server on the
//! configured transport.

use anyhow::Result;
use serde_json::json;

use tobe_mcp_server::core::{Config, McpServer, TransportService};
use tobe_mcp_server::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging; log level and destination come from the
    // caller, never from the logging component itself.
    let logger = logging::setup_logging(&config.logging.level, config.logging.file.clone());

    logger.log_server_event(
        "startup",
        Some(&json!({
            "name": config.server.name,
            "version": config.server.version,
            "transport": config.transport.description(),
        })),
    );

    // Create the MCP server
    let server = McpServer::new(config.clone());

    logger.info("Server initialized");

    // Run the transport until the client disconnects
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    logger.log_server_event("shutdown", None);

    Ok(())
}
