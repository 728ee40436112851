//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its metadata and message text.

use rmcp::model::PromptArgument;

pub mod product_api_help;

pub use product_api_help::ProductApiHelpPrompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The user message the prompt expands to.
    fn text() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }
}
