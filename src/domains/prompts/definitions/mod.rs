//! Prompt definitions, one file per role.
//!
//! Each role file declares a shared persona profile and one struct per
//! prompt implementing [`PromptDefinition`]. Adding a prompt means adding
//! a struct here and registering it in `registry.rs`; the service never
//! changes.

use rmcp::model::PromptArgument;

mod article_writer;
mod developer;
mod english_teacher;
mod ui_designer;

pub use article_writer::{
    ArticleEditorPrompt, ArticleGeneratorPrompt, ContentAnalysisPrompt, ContentOutlinePrompt,
    MultilingualContentPrompt, SeoOptimizationPrompt,
};
pub use developer::{DesignPrompt, ReviewPrompt};
pub use english_teacher::{
    ConversationPracticePrompt, ReadingComprehensionPrompt, VocabularyBuilderPrompt,
    WordLessonPrompt,
};
pub use ui_designer::{AccessibilityAuditPrompt, DesignSystemPrompt, UiDesignPrompt};

/// Static description of one prompt: metadata, persona, templates.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Persona preamble shared by every prompt of the role.
    fn role_profile() -> &'static str;

    /// System-message body with `{{variable}}` placeholders.
    fn system_template() -> &'static str;

    /// Optional user-message template echoing the arguments.
    fn user_template() -> Option<&'static str> {
        None
    }

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Default values for optional arguments.
    fn defaults() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }
}

/// Shorthand for a required string argument.
fn required(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

/// Shorthand for an optional string argument.
fn optional(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(false),
    }
}
