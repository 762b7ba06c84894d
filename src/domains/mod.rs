//! Business logic organized by bounded contexts.
//!
//! This server exposes a single domain: prompt templates served over the
//! MCP prompts capability.

pub mod prompts;
