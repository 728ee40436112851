//! The tool handler contract.
//!
//! A handler is a named, described, schema-carrying unit of work. `execute`
//! always yields a [`CallToolResult`] with a single text item: failures are
//! reported in the text, never returned as errors.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use std::sync::Arc;

#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Stable unique identifier, used as the dispatch key.
    fn name(&self) -> &str;

    /// Human-readable description shown to clients.
    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments.
    ///
    /// Advertised to clients only; handlers check their own arguments.
    fn input_schema(&self) -> JsonObject;

    /// Run the tool.
    async fn execute(&self, arguments: serde_json::Value) -> CallToolResult;

    /// Describe this tool as an MCP `Tool` model.
    fn to_tool(&self) -> Tool {
        Tool {
            name: self.name().to_string().into(),
            description: Some(self.description().to_string().into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
