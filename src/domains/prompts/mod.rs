//! Prompts domain module.
//!
//! Everything prompt-related lives here: static definitions grouped by
//! role (developer, UI designer, English teacher, article writer), the
//! template renderer, and the service the MCP server delegates to.
//!
//! ## Architecture
//!
//! - `definitions/` - prompt definitions, one file per role
//! - `registry.rs` - central prompt registration
//! - `service.rs` - listing and rendering
//! - `templates.rs` - template rendering engine

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::{MessageRole, PromptTemplate, RenderedMessage};
