//! Prompt-specific error types.

use thiserror::Error;

/// Errors that can occur while listing or rendering prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested prompt was not found.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// Required argument is missing.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_argument(arg: impl Into<String>) -> Self {
        Self::MissingArgument(arg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
