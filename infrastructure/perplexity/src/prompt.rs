use business::domain::recipe::model::NO_RECIPE_SENTINEL;

use crate::types::{ChatMessage, ChatRequest};

/// Which instruction set is sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptVersion {
    /// Strict plain-text layout with bold section headings and bullet rules.
    #[default]
    Detailed,
    /// Shorter markdown-oriented parser instructions.
    Concise,
}

impl std::fmt::Display for PromptVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptVersion::Detailed => write!(f, "detailed"),
            PromptVersion::Concise => write!(f, "concise"),
        }
    }
}

impl std::str::FromStr for PromptVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "detailed" => Ok(PromptVersion::Detailed),
            "concise" => Ok(PromptVersion::Concise),
            _ => Err(format!("Invalid prompt version: {}", s)),
        }
    }
}

const NO_RECIPE_INSTRUCTION: &str = r#"When given a recipe URL, first determine if there is a valid recipe on the page. A valid recipe must have both ingredients and cooking instructions.

If there is NO valid recipe on the page, respond with exactly this error message and nothing else:
"{SENTINEL} Unable to find a valid recipe on this page. Please ensure the URL points to a page containing a complete recipe with ingredients and instructions.""#;

const DETAILED_SYSTEM_PROMPT: &str = r#"You are a helpful cooking assistant. {NO_RECIPE}

If there IS a valid recipe, extract and organize the key components in this beautiful format:

[Recipe Title in Title Case]

**Ingredients**

For the [First Component]:
• [ingredient with precise measurement, capitalize ingredient names]

• [ingredient with precise measurement, capitalize ingredient names]

• [ingredient with precise measurement, capitalize ingredient names]

For the [Second Component]:
• [ingredient with precise measurement, capitalize ingredient names]

• [ingredient with precise measurement, capitalize ingredient names]

**Instructions**

1. [Start with action verb] [rest of the instruction as a clear, complete sentence]

2. [Start with action verb] [rest of the instruction as a clear, complete sentence]

[For steps with sub-steps, format like this:]
3. [Main step title with action verb]:
   • [Sub-step starting with action verb]
   • [Sub-step starting with action verb]
   • [Sub-step starting with action verb]

**Key Tips**
• [Concise, helpful tip starting with action verb]

• [Concise, helpful tip starting with action verb]

• [Concise, helpful tip starting with action verb]

Important formatting rules:
1. Format section headings ('Ingredients', 'Instructions', 'Key Tips') in bold using **text**
2. Use consistent bullet points (•) for all ingredients and sub-steps
3. Write measurements in full (e.g., 'tablespoon' not 'tbsp')
4. Each ingredient MUST be on its own line with a blank line between ingredients
5. Instruction numbers MUST be on the same line as their text (inline)
6. Sub-steps should be indented with exactly three spaces before the bullet point
7. Leave exactly one blank line before each major section heading
8. Start each instruction and tip with an action verb
9. Capitalize ingredient names and proper nouns
10. Use consistent punctuation throughout
11. Keep instructions clear and direct
12. Format measurements consistently (e.g., '1 tablespoon' not 'one tablespoon')
13. Use parallel structure in all lists and steps
14. CRITICAL: Keep ingredients on separate lines with blank lines between them, but instruction numbers inline with text"#;

const CONCISE_SYSTEM_PROMPT: &str = r#"You are a specialized recipe parser that extracts and formats recipes in a clear, standardized way. {NO_RECIPE}

If there IS a valid recipe, focus on:
1. Title of the recipe in Title Case
2. **Ingredients**, grouped under "For the [Component]:" headings, one • bullet per ingredient with precise measurements
3. **Instructions** as numbered steps; sub-steps indented with three spaces and a • bullet
4. **Key Tips** as • bullets

Be thorough but concise. Remove any unnecessary text, ads, or personal stories."#;

const PROBE_SYSTEM_PROMPT: &str = "You are a test assistant.";
const PROBE_USER_PROMPT: &str = "Say hello";

fn system_prompt(version: PromptVersion) -> String {
    let template = match version {
        PromptVersion::Detailed => DETAILED_SYSTEM_PROMPT,
        PromptVersion::Concise => CONCISE_SYSTEM_PROMPT,
    };
    let no_recipe = NO_RECIPE_INSTRUCTION.replace("{SENTINEL}", NO_RECIPE_SENTINEL);
    template.replace("{NO_RECIPE}", &no_recipe)
}

fn user_prompt(url: &str, version: PromptVersion) -> String {
    match version {
        PromptVersion::Detailed => format!(
            "Please extract the important parts of the recipe from this URL: {}",
            url
        ),
        PromptVersion::Concise => format!(
            "Visit this recipe URL and extract the essential recipe information: {}",
            url
        ),
    }
}

/// Builds the chat request asking the model to extract the recipe at `url`.
///
/// The URL is embedded verbatim; it is neither validated nor escaped.
pub fn build_prompt(url: &str, model: &str, version: PromptVersion) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(system_prompt(version)),
            ChatMessage::user(user_prompt(url, version)),
        ],
    }
}

/// Builds the minimal request used to check upstream connectivity.
pub fn build_probe_request(model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(PROBE_SYSTEM_PROMPT),
            ChatMessage::user(PROBE_USER_PROMPT),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VERSIONS: [PromptVersion; 2] = [PromptVersion::Detailed, PromptVersion::Concise];

    #[test]
    fn should_put_system_message_before_user_message() {
        let request = build_prompt("https://example.com/pie", "sonar-pro", PromptVersion::Detailed);

        assert_eq!(request.model, "sonar-pro");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
    }

    #[test]
    fn should_describe_expected_sections_in_detailed_prompt() {
        let request = build_prompt("https://example.com/pie", "sonar-pro", PromptVersion::Detailed);
        let system = request.system_content().unwrap();

        assert!(system.contains("**Ingredients**"));
        assert!(system.contains("For the [First Component]:"));
        assert!(system.contains("**Instructions**"));
        assert!(system.contains("   • [Sub-step"));
        assert!(system.contains("**Key Tips**"));
    }

    #[test]
    fn should_not_leave_template_placeholders() {
        for version in VERSIONS {
            let request = build_prompt("https://example.com/pie", "sonar-pro", version);
            let system = request.system_content().unwrap();

            assert!(!system.contains("{NO_RECIPE}"));
            assert!(!system.contains("{SENTINEL}"));
        }
    }

    #[test]
    fn should_build_probe_request_with_configured_model() {
        let request = build_probe_request("sonar");

        assert_eq!(request.model, "sonar");
        assert_eq!(request.last_content(), Some("Say hello"));
    }

    #[test]
    fn should_parse_prompt_version_case_insensitively() {
        assert_eq!("Detailed".parse::<PromptVersion>(), Ok(PromptVersion::Detailed));
        assert_eq!(" concise ".parse::<PromptVersion>(), Ok(PromptVersion::Concise));
        assert!("v3".parse::<PromptVersion>().is_err());
    }

    proptest! {
        #[test]
        fn should_embed_url_verbatim_and_carry_sentinel(url in "\\PC{1,200}") {
            for version in VERSIONS {
                let request = build_prompt(&url, "sonar-pro", version);

                prop_assert!(request.last_content().unwrap().contains(url.as_str()));
                prop_assert!(request.system_content().unwrap().contains(NO_RECIPE_SENTINEL));
            }
        }
    }
}
