//! Core module containing shared infrastructure components.
//!
//! Foundational building blocks for the MCP server: error handling,
//! configuration, server lifecycle management, and the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
