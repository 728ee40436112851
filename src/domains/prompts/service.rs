//! Prompt service implementation.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use tracing::info;

use super::error::PromptError;
use super::registry::{PromptTemplate, get_all_prompts};

/// Service for listing and expanding prompts.
pub struct PromptService {
    /// Registered prompts in advertisement order.
    prompts: Vec<PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService populated from the registry.
    pub fn new() -> Self {
        info!("Initializing PromptService");
        Self {
            prompts: get_all_prompts(),
        }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: (!template.arguments.is_empty()).then(|| template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Expand a prompt by name.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PromptError::not_found(name))?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                template.text.clone(),
            )],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
