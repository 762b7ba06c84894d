//! Prompt service implementation.
//!
//! The PromptService holds the registered templates and handles listing
//! and rendering. Prompts are defined in `definitions/` and registered in
//! `registry.rs`; adding a prompt does not require modifying this file.

use rmcp::model::{GetPromptResult, Prompt};
use std::collections::HashMap;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::PromptsConfig;
use crate::logging::{Level, Logger};

/// Service for listing and instantiating prompts.
pub struct PromptService {
    #[allow(dead_code)]
    config: PromptsConfig,

    /// Registered templates, keyed by prompt name.
    prompts: HashMap<String, PromptTemplate>,

    logger: Logger,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new(config: PromptsConfig) -> Self {
        let logger = Logger::new("prompts", Level::Info, None);
        logger.info("Initializing PromptService");

        let mut service = Self {
            config,
            prompts: HashMap::new(),
            logger,
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template, replacing any previous one of the
    /// same name.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        self.logger
            .debug(format!("Registering prompt: {}", template.name));
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Render a prompt into its conversation-seed messages.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self.prompts.get(name).ok_or_else(|| {
            self.logger.warning(format!("Unknown prompt requested: {name}"));
            PromptError::not_found(name)
        })?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        self.logger.info(format!("Rendering prompt: {name}"));
        let messages = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: messages
                .into_iter()
                .map(|message| message.into_prompt_message())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::{PromptMessage, PromptMessageContent};

    fn service() -> PromptService {
        PromptService::new(PromptsConfig::default())
    }

    fn text_of(message: &PromptMessage) -> &str {
        match &message.content {
            PromptMessageContent::Text { text } => text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_lists_all_registered_prompts() {
        let prompts = service().list_prompts().await;
        assert_eq!(prompts.len(), 15);
        assert!(prompts.iter().any(|p| p.name == "design"));
        assert!(prompts.iter().any(|p| p.name == "accessibility_audit"));
    }

    #[tokio::test]
    async fn test_get_prompt_renders_system_and_user_messages() {
        let result = service()
            .get_prompt(
                "word_lesson",
                Some(args(&[("word", "serendipity"), ("context", "a novel")])),
            )
            .await
            .unwrap();

        assert_eq!(result.messages.len(), 2);
        let system = text_of(&result.messages[0]);
        assert!(system.contains("Emma"));
        assert!(system.contains(r#"the word: "serendipity""#));
        assert!(system.contains("Context: a novel"));
    }

    #[tokio::test]
    async fn test_get_prompt_single_message_prompt() {
        let result = service()
            .get_prompt("design", Some(args(&[("requirements", "a todo app")])))
            .await
            .unwrap();

        assert_eq!(result.messages.len(), 1);
        assert!(text_of(&result.messages[0]).contains("a todo app"));
    }

    #[tokio::test]
    async fn test_get_prompt_applies_defaults() {
        let result = service()
            .get_prompt("vocabulary_builder", Some(args(&[("topic", "travel")])))
            .await
            .unwrap();

        let system = text_of(&result.messages[0]);
        assert!(system.contains("Level: intermediate"));
        assert!(system.contains("Number of words: 10"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let result = service().get_prompt("design", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_multilingual_content_default_cultural_context() {
        let result = service()
            .get_prompt(
                "multilingual_content",
                Some(args(&[
                    ("original_content", "Hello world"),
                    ("target_language", "Chinese"),
                ])),
            )
            .await
            .unwrap();

        let system = text_of(&result.messages[0]);
        assert!(system.contains("Cultural Context: General"));
    }
}
