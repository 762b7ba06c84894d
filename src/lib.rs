//! TOBE MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing role-based prompt
//! templates: developer, UI designer, English teacher, and article
//! writer. Each prompt interpolates a handful of arguments into a fixed
//! template and yields a system + user conversation seed.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and
//!   the stdio transport
//! - **domains::prompts**: prompt definitions, registry, rendering, and
//!   the prompt service
//! - **logging**: centralized logging with a console sink and an
//!   optional file sink
//!
//! # Example
//!
//! ```rust,no_run
//! use tobe_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod logging;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
