//! Prompt templates and rendering.
//!
//! A [`PromptTemplate`] pairs a system-message template (role profile plus
//! task body) with an optional user-message template that echoes the
//! supplied arguments. Rendering substitutes `{{variable}}` placeholders,
//! evaluates `{{#if variable}}...{{else}}...{{/if}}` conditionals, and
//! applies per-argument defaults for absent or empty optional arguments.

use rmcp::model::{PromptArgument, PromptMessage, PromptMessageRole};
use std::collections::HashMap;

use super::error::PromptError;

/// Role tag of a rendered conversation-seed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    /// Map to the wire-level prompt-message role.
    ///
    /// MCP prompt messages admit only user/assistant roles, so the system
    /// seed travels as the leading user message.
    pub fn as_prompt_role(self) -> PromptMessageRole {
        match self {
            MessageRole::System | MessageRole::User => PromptMessageRole::User,
        }
    }
}

/// One rendered, role-tagged message.
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    pub role: MessageRole,
    pub content: String,
}

impl RenderedMessage {
    pub fn into_prompt_message(self) -> PromptMessage {
        PromptMessage::new_text(self.role.as_prompt_role(), self.content)
    }
}

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// Default values substituted for absent or empty optional arguments.
    pub defaults: HashMap<String, String>,

    /// Template of the system message, `{{variable}}` syntax.
    pub system_template: String,

    /// Optional template of the trailing user message.
    pub user_template: Option<String>,
}

impl PromptTemplate {
    /// Render the ordered conversation seed: system message first, then
    /// the user echo message when the template defines one.
    pub fn render(
        &self,
        arguments: &HashMap<String, String>,
    ) -> Result<Vec<RenderedMessage>, PromptError> {
        let arguments = self.effective_arguments(arguments);

        let mut messages = vec![RenderedMessage {
            role: MessageRole::System,
            content: render_template(&self.system_template, &arguments)?,
        }];

        if let Some(user_template) = &self.user_template {
            messages.push(RenderedMessage {
                role: MessageRole::User,
                content: render_template(user_template, &arguments)?,
            });
        }

        Ok(messages)
    }

    /// Merge caller arguments over the template defaults.
    ///
    /// An empty string counts as absent, matching the conditional
    /// semantics below.
    fn effective_arguments(&self, arguments: &HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = self.defaults.clone();
        for (key, value) in arguments {
            if !value.is_empty() {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

/// Render one template string against the argument map.
fn render_template(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut result = process_conditionals(template, arguments)?;

    for (key, value) in arguments {
        let placeholder = format!("{{{{{key}}}}}");
        result = result.replace(&placeholder, value);
    }

    Ok(strip_unmatched_placeholders(&result))
}

/// Evaluate `{{#if variable}}...{{else}}...{{/if}}` blocks.
///
/// A variable counts as set when it is present and non-empty.
fn process_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    const IF_TAG: &str = "{{#if ";
    const ELSE_TAG: &str = "{{else}}";
    const ENDIF_TAG: &str = "{{/if}}";

    let mut result = template.to_string();

    while let Some(if_start) = result.find(IF_TAG) {
        let var_end = result[if_start..]
            .find("}}")
            .map(|off| if_start + off)
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let var_name = result[if_start + IF_TAG.len()..var_end].trim().to_string();

        let endif_pos = result[var_end..]
            .find(ENDIF_TAG)
            .map(|off| var_end + off)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;

        let block = &result[var_end + 2..endif_pos];
        let (when_set, when_unset) = match block.find(ELSE_TAG) {
            Some(else_pos) => (&block[..else_pos], &block[else_pos + ELSE_TAG.len()..]),
            None => (block, ""),
        };

        let is_set = arguments.get(&var_name).is_some_and(|v| !v.is_empty());
        let replacement = if is_set { when_set } else { when_unset };

        result = format!(
            "{}{}{}",
            &result[..if_start],
            replacement,
            &result[endif_pos + ENDIF_TAG.len()..]
        );
    }

    Ok(result)
}

/// Drop simple `{{variable}}` placeholders left unmatched after
/// substitution, leaving conditional tags untouched.
fn strip_unmatched_placeholders(template: &str) -> String {
    let mut result = template.to_string();
    let mut start = 0;

    while let Some(pos) = result[start..].find("{{") {
        let abs_pos = start + pos;
        if let Some(end_off) = result[abs_pos..].find("}}") {
            let end_abs = abs_pos + end_off + 2;
            let placeholder = &result[abs_pos..end_abs];

            if !placeholder.contains('#') && !placeholder.contains('/') {
                result = format!("{}{}", &result[..abs_pos], &result[end_abs..]);
                continue;
            }
        }
        start = abs_pos + 2;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(system: &str, user: Option<&str>) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: None,
            arguments: vec![],
            defaults: HashMap::new(),
            system_template: system.to_string(),
            user_template: user.map(str::to_string),
        }
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = template("Hello, {{name}}!", None);
        let messages = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[0].content, "Hello, World!");
    }

    #[test]
    fn test_system_and_user_messages_in_order() {
        let template = template("Task: {{task}}", Some("Task: {{task}}"));
        let messages = template.render(&args(&[("task", "review")])).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "Task: review");
    }

    #[test]
    fn test_conditional_with_value() {
        let template = template("Hello{{#if name}}, {{name}}{{/if}}!", None);
        let messages = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(messages[0].content, "Hello, World!");
    }

    #[test]
    fn test_conditional_without_value() {
        let template = template("Hello{{#if name}}, {{name}}{{/if}}!", None);
        let messages = template.render(&HashMap::new()).unwrap();
        assert_eq!(messages[0].content, "Hello!");
    }

    #[test]
    fn test_conditional_with_else() {
        let template = template(
            "Context: {{#if context}}{{context}}{{else}}General{{/if}}",
            None,
        );
        let messages = template.render(&HashMap::new()).unwrap();
        assert_eq!(messages[0].content, "Context: General");
    }

    #[test]
    fn test_empty_argument_counts_as_unset() {
        let template = template("{{#if context}}Context: {{context}}{{/if}}", None);
        let messages = template.render(&args(&[("context", "")])).unwrap();
        assert_eq!(messages[0].content, "");
    }

    #[test]
    fn test_defaults_fill_absent_arguments() {
        let mut template = template("Level: {{level}}, Count: {{count}}", None);
        template.defaults = args(&[("level", "intermediate"), ("count", "10")]);

        let messages = template.render(&args(&[("count", "25")])).unwrap();
        assert_eq!(messages[0].content, "Level: intermediate, Count: 25");
    }

    #[test]
    fn test_unmatched_placeholders_are_stripped() {
        let template = template("Hello, {{name}}{{unknown}}!", None);
        let messages = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(messages[0].content, "Hello, World!");
    }

    #[test]
    fn test_unclosed_conditional_is_an_error() {
        let template = template("{{#if name}}no end", None);
        assert!(template.render(&HashMap::new()).is_err());
    }
}
