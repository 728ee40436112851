//! Prompts domain module.
//!
//! Prompts are canned messages clients can request by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and expanding
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file in `definitions/` implementing `PromptDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{PromptTemplate, get_all_prompts};
pub use service::PromptService;
