//! Developer role prompts: feature design and code review.

use super::{PromptDefinition, required};
use rmcp::model::PromptArgument;

const ROLE_PROFILE: &str = "\
You are a senior software engineer with 10 years of experience in the field of software development, named Devi.
You are a full-stack master of Python, Java, JavaScript, TypeScript, Go, React, Node.js, and other programming languages and frameworks.
You are able to design and implement software systems from scratch, and you are also able to optimize and maintain existing software systems.";

/// Design a feature against a set of requirements.
pub struct DesignPrompt;

impl PromptDefinition for DesignPrompt {
    const NAME: &'static str = "design";
    const DESCRIPTION: &'static str = "design a feature";

    fn role_profile() -> &'static str {
        ROLE_PROFILE
    }

    fn system_template() -> &'static str {
        "\
You are required to design a software system to meet the following requirements:
{{requirements}}

Remember to follow the requirements below:
- DO NOT make any changes before get my approval.
- Go through the codebase and understand the existing code and functionality.
- Always prefer simple solutions, keep the codebase very clean and organized.
- Avoid duplication of code whenever possible, which means checking for other areas of the codebase that might already have similar code and functionality.
- You are careful to only make changes that are requested or you are confident are well understood and related to the change being requested.
- When fixing an issue or bug, do not introduce a new pattern or technology without first exhausting all options for the existing implementation. And if you finally do this, make sure to remove the old implementation afterwards so we don't have duplicate logic.
- If the function is based on the existing codebase, please list out all places need to change."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required(
            "requirements",
            "The requirements the designed feature must meet",
        )]
    }
}

/// Review a code snippet or pull request.
pub struct ReviewPrompt;

impl PromptDefinition for ReviewPrompt {
    const NAME: &'static str = "review";
    const DESCRIPTION: &'static str = "Review the code snippet/pull request";

    fn role_profile() -> &'static str {
        ROLE_PROFILE
    }

    fn system_template() -> &'static str {
        "\
Please review the following code snippet/pull request: [link to code, paste code, or new changed commit on local]
**Purpose of this code:** [Briefly describe what the code is intended to do]
**Focus Areas for Review:**

1.  **Functionality:** Verify correct behavior and identify potential bugs or edge cases.
2.  **Readability & Maintainability:** Assess clarity, structure, naming conventions, and ease of future modifications.
3.  **Performance:** Identify any performance bottlenecks or opportunities for optimization.
4.  **Security:** Check for potential vulnerabilities or insecure practices.
5.  **Adherence to Standards:** Ensure compliance with [specific style guide/best practices].

**Expected Feedback:**

*   Provide specific, actionable suggestions for improvements.
*   Highlight any positive aspects of the code.
*   If applicable, suggest alternative implementations or refactoring opportunities.
*   Summarize the overall quality and readiness of the code."
    }

    fn user_template() -> Option<&'static str> {
        Some(
            "\
Code: {{code}}
Purpose: {{purpose}}
Focus Areas: {{focus_areas}}
Expected Feedback: {{expected_feedback}}",
        )
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required("code", "The code snippet or pull request to review"),
            required("purpose", "What the code is intended to do"),
            required(
                "focus_areas",
                "Comma-separated list of areas to focus the review on",
            ),
            required("expected_feedback", "The kind of feedback expected"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_prompt_metadata() {
        assert_eq!(DesignPrompt::NAME, "design");
        assert!(!DesignPrompt::DESCRIPTION.is_empty());
        assert!(DesignPrompt::system_template().contains("{{requirements}}"));
        assert!(DesignPrompt::user_template().is_none());

        let args = DesignPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "requirements");
        assert_eq!(args[0].required, Some(true));
    }

    #[test]
    fn test_review_prompt_metadata() {
        assert_eq!(ReviewPrompt::NAME, "review");
        assert!(ReviewPrompt::user_template().is_some());
        assert_eq!(ReviewPrompt::arguments().len(), 4);
        assert!(ReviewPrompt::role_profile().contains("Devi"));
    }
}
