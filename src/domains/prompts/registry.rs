//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use rmcp::model::PromptArgument;

use super::definitions::{ProductApiHelpPrompt, PromptDefinition};

/// A registered prompt: metadata plus the message it expands to.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
    pub text: String,
}

fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        text: P::text().to_string(),
    }
}

/// Get all registered prompts, in advertisement order.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![build_template::<ProductApiHelpPrompt>()]
}
