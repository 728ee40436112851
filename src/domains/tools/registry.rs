//! Tool Registry - central registration and dispatch for all tools.
//!
//! Handlers are keyed by name. Listing follows registration order; dispatch
//! to an unknown name is the only error that leaves the registry.

use rmcp::model::{CallToolResult, Tool};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::definitions::{
    CreateProductTool, GetProductDetailTool, GetProductsTool, TestApiConnectionTool,
};
use super::{ToolError, ToolHandler};
use crate::domains::products::ProductService;

/// Registry of tool handlers.
///
/// Built once at startup, then shared read-only.
#[derive(Default)]
pub struct ToolRegistry {
    /// Handlers in registration order.
    tools: Vec<Arc<dyn ToolHandler>>,

    /// Key: tool name, Value: position in `tools`
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own name.
    ///
    /// Registering a name again replaces the earlier handler in place.
    pub fn register_tool(&mut self, handler: Arc<dyn ToolHandler>) {
        let name = handler.name().to_string();
        match self.index.get(&name) {
            Some(&position) => {
                warn!("Replacing previously registered tool: {}", name);
                self.tools[position] = handler;
            }
            None => {
                info!("Registering tool: {}", name);
                self.index.insert(name, self.tools.len());
                self.tools.push(handler);
            }
        }
    }

    /// Builder-style [`register_tool`](Self::register_tool).
    pub fn with_tool(mut self, handler: impl ToolHandler + 'static) -> Self {
        self.register_tool(Arc::new(handler));
        self
    }

    /// Number of distinct tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Look up a handler by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// Describe every registered tool, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.to_tool()).collect()
    }

    /// Dispatch a tool call to the handler registered under `name`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let handler = self.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;

        info!("Calling tool: {}", name);
        Ok(handler.execute(arguments).await)
    }
}

/// Build the registry with every product tool, all sharing one service.
pub fn build_tool_registry(service: Arc<dyn ProductService>) -> ToolRegistry {
    ToolRegistry::new()
        .with_tool(GetProductsTool::new(service.clone()))
        .with_tool(GetProductDetailTool::new(service.clone()))
        .with_tool(CreateProductTool::new(service.clone()))
        .with_tool(TestApiConnectionTool::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{StubProductService, is_error, text_of};
    use async_trait::async_trait;
    use rmcp::model::JsonObject;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    /// Minimal handler answering with a fixed text.
    struct FixedTool {
        name: &'static str,
        reply: &'static str,
    }

    #[async_trait]
    impl ToolHandler for FixedTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "fixed reply"
        }

        fn input_schema(&self) -> JsonObject {
            JsonObject::new()
        }

        async fn execute(&self, _arguments: serde_json::Value) -> CallToolResult {
            CallToolResult::success(vec![rmcp::model::Content::text(self.reply)])
        }
    }

    fn product_registry() -> ToolRegistry {
        build_tool_registry(Arc::new(StubProductService::echoing()))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = product_registry();
        assert_eq!(
            registry.tool_names(),
            vec![
                "get_products",
                "get_product_detail",
                "create_product",
                "test_api_connection"
            ]
        );
    }

    #[test]
    fn test_list_tools_matches_handlers() {
        let registry = product_registry();
        let tools = registry.list_tools();
        assert_eq!(tools.len(), 4);

        let detail = &tools[1];
        assert_eq!(detail.name, "get_product_detail");
        assert_eq!(detail.description.as_deref(), Some("상품 상세 정보를 조회합니다."));
        assert_eq!(detail.input_schema["required"], json!(["id"]));
        assert_eq!(detail.input_schema["properties"]["id"]["type"], "number");

        let create = &tools[2];
        assert_eq!(
            create.input_schema["required"],
            json!(["name", "description", "price", "stockQuantity"])
        );
        assert!(create.input_schema["properties"].get("imageUrl").is_some());
    }

    #[test]
    fn test_reregistration_last_write_wins() {
        let mut registry = ToolRegistry::new()
            .with_tool(FixedTool { name: "a", reply: "first" })
            .with_tool(FixedTool { name: "b", reply: "b" });
        registry.register_tool(Arc::new(FixedTool { name: "a", reply: "second" }));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tool_names(), vec!["a", "b"]);
        assert_eq!(registry.list_tools().len(), 2);
    }

    #[tokio::test]
    async fn test_reregistered_handler_is_dispatched() {
        let registry = ToolRegistry::new()
            .with_tool(FixedTool { name: "a", reply: "first" })
            .with_tool(FixedTool { name: "a", reply: "second" });

        let result = assert_ok!(registry.call_tool("a", json!({})).await);
        assert_eq!(text_of(&result), "second");
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = product_registry();
        let err = assert_err!(registry.call_tool("nonexistent", json!({})).await);
        assert!(matches!(err, ToolError::NotFound(ref name) if name == "nonexistent"));
        assert_eq!(err.to_string(), "Unknown tool: nonexistent");
    }

    #[tokio::test]
    async fn test_registry_call_dispatches_by_name() {
        let stub = Arc::new(StubProductService::echoing());
        let registry = build_tool_registry(stub.clone());

        let result = assert_ok!(registry.call_tool("get_product_detail", json!({})).await);
        assert_eq!(text_of(&result), "상품 ID를 입력해주세요.");
        assert!(stub.calls().is_empty());

        let result = assert_ok!(registry.call_tool("test_api_connection", json!({})).await);
        assert!(!is_error(&result));
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_registry() {
        let stub = Arc::new(StubProductService::echoing());
        let registry = Arc::new(build_tool_registry(stub.clone()));

        let calls = (1..=5).map(|id| {
            let registry = registry.clone();
            async move {
                registry
                    .call_tool("get_product_detail", json!({ "id": id }))
                    .await
            }
        });
        let results = futures::future::join_all(calls).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(stub.calls().len(), 5);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("get_products").is_none());
    }
}
