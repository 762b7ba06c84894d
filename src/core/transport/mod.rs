//! Transport layer for the MCP server.
//!
//! The server communicates over standard input/output, the default MCP
//! mode. The transport handles connection lifecycle and delegates
//! message processing to the server handler.

mod config;
mod error;
mod service;
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
