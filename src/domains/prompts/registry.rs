//! Central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the definition in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    AccessibilityAuditPrompt, ArticleEditorPrompt, ArticleGeneratorPrompt,
    ContentAnalysisPrompt, ContentOutlinePrompt, ConversationPracticePrompt, DesignPrompt,
    DesignSystemPrompt, MultilingualContentPrompt, PromptDefinition, ReadingComprehensionPrompt,
    ReviewPrompt, SeoOptimizationPrompt, UiDesignPrompt, VocabularyBuilderPrompt,
    WordLessonPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
///
/// The role profile is prepended to the system-message body so every
/// prompt of a role opens with the same persona.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    let mut system_template = String::from(P::role_profile());
    system_template.push_str("\n\n");
    system_template.push_str(P::system_template());

    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        defaults: P::defaults()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        system_template,
        user_template: P::user_template().map(str::to_string),
    }
}

/// All registered prompts, grouped by role.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        // Developer
        build_template::<DesignPrompt>(),
        build_template::<ReviewPrompt>(),
        // UI designer
        build_template::<UiDesignPrompt>(),
        build_template::<DesignSystemPrompt>(),
        build_template::<AccessibilityAuditPrompt>(),
        // English teacher
        build_template::<WordLessonPrompt>(),
        build_template::<VocabularyBuilderPrompt>(),
        build_template::<ConversationPracticePrompt>(),
        build_template::<ReadingComprehensionPrompt>(),
        // Article writer
        build_template::<ArticleGeneratorPrompt>(),
        build_template::<ContentOutlinePrompt>(),
        build_template::<ArticleEditorPrompt>(),
        build_template::<MultilingualContentPrompt>(),
        build_template::<SeoOptimizationPrompt>(),
        build_template::<ContentAnalysisPrompt>(),
    ]
}

/// The list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        DesignPrompt::NAME,
        ReviewPrompt::NAME,
        UiDesignPrompt::NAME,
        DesignSystemPrompt::NAME,
        AccessibilityAuditPrompt::NAME,
        WordLessonPrompt::NAME,
        VocabularyBuilderPrompt::NAME,
        ConversationPracticePrompt::NAME,
        ReadingComprehensionPrompt::NAME,
        ArticleGeneratorPrompt::NAME,
        ContentOutlinePrompt::NAME,
        ArticleEditorPrompt::NAME,
        MultilingualContentPrompt::NAME,
        SeoOptimizationPrompt::NAME,
        ContentAnalysisPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 15);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"design"));
        assert!(names.contains(&"ui_design"));
        assert!(names.contains(&"word_lesson"));
        assert!(names.contains(&"article_generator"));
    }

    #[test]
    fn test_prompt_names_match_templates() {
        let names = prompt_names();
        let templates = get_all_prompts();
        assert_eq!(names.len(), templates.len());
        for (name, template) in names.iter().zip(&templates) {
            assert_eq!(*name, template.name);
        }
    }

    #[test]
    fn test_prompt_names_are_unique() {
        let names = prompt_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_every_template_opens_with_its_persona() {
        for template in get_all_prompts() {
            assert!(
                template.system_template.starts_with("You are a senior"),
                "prompt {} is missing its role profile",
                template.name
            );
        }
    }

    #[test]
    fn test_defaults_only_cover_declared_arguments() {
        for template in get_all_prompts() {
            for key in template.defaults.keys() {
                assert!(
                    template.arguments.iter().any(|a| &a.name == key),
                    "prompt {} has a default for undeclared argument {}",
                    template.name,
                    key
                );
            }
        }
    }
}
