//! Domains module containing business logic organized by bounded contexts.
//!
//! - **products**: the remote product API (DTOs, HTTP client, service)
//! - **tools**: MCP tools dispatched through the tool registry
//! - **prompts**: prompt templates
//! - **resources**: readable resources

pub mod products;
pub mod prompts;
pub mod resources;
pub mod tools;
