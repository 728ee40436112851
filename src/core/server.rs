//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools implement `ToolHandler` in `domains/tools/definitions/` and are
//! collected into a `ToolRegistry` at startup. `tools/list` and `tools/call`
//! are answered straight from the registry, so adding a tool never touches
//! this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    products::{ApiClient, HttpProductService, ProductService},
    prompts::PromptService,
    resources::ResourceService,
    tools::{ToolError, ToolRegistry, build_tool_registry},
};

/// The main MCP server handler.
///
/// Cloning is cheap: every service is shared behind an `Arc`.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry answering tool listing and tool calls.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,
}

impl McpServer {
    /// Create a server whose tools talk to the given product service.
    pub fn new(config: Config, products: Arc<dyn ProductService>) -> Self {
        let config = Arc::new(config);

        Self {
            tools: Arc::new(build_tool_registry(products)),
            resource_service: Arc::new(ResourceService::new(&config)),
            prompt_service: Arc::new(PromptService::new()),
            config,
        }
    }

    /// Create a server backed by the HTTP product API described in `config`.
    pub fn from_config(config: Config) -> crate::Result<Self> {
        let client = ApiClient::new(&config.api)?;
        info!("Product API client targeting {}", client.base_url());

        let products = Arc::new(HttpProductService::new(client));
        Ok(Self::new(config, products))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Dispatch a tool call, mapping an unknown tool to a protocol error.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = serde_json::Value::Object(arguments.unwrap_or_default());

        self.tools
            .call_tool(name, arguments)
            .await
            .map_err(|e| match e {
                ToolError::NotFound(_) => McpError::invalid_params(e.to_string(), None),
                other => McpError::internal_error(other.to_string(), None),
            })
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "This server exposes a product API: list products, fetch product details, \
                 create products and test the API connection."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool(&request.name, request.arguments).await
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::{StubProductService, text_of};
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::new(Config::default(), Arc::new(StubProductService::echoing()))
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "mcp-tutorial");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_server_exposes_product_tools() {
        let server = test_server();
        assert_eq!(server.name(), "mcp-tutorial");
        assert_eq!(server.tools().len(), 4);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_is_protocol_error() {
        let server = test_server();
        let err = server.dispatch_tool("nonexistent", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Unknown tool: nonexistent"));
    }

    #[tokio::test]
    async fn test_dispatch_without_arguments() {
        let server = test_server();
        let result = server.dispatch_tool("create_product", None).await.unwrap();
        assert_eq!(
            text_of(&result),
            "다음 필수 정보가 누락되었습니다: name, description, price, stockQuantity"
        );
    }

    #[tokio::test]
    async fn test_dispatch_with_arguments() {
        let server = test_server();
        let arguments = json!({ "id": 5 }).as_object().cloned();
        let result = server
            .dispatch_tool("get_product_detail", arguments)
            .await
            .unwrap();
        assert!(text_of(&result).contains("\"id\": 5"));
    }

    #[tokio::test]
    async fn test_from_config_builds_http_backed_server() {
        let server = McpServer::from_config(Config::default()).unwrap();
        assert_eq!(
            server.tools().tool_names(),
            vec![
                "get_products",
                "get_product_detail",
                "create_product",
                "test_api_connection"
            ]
        );
    }
}
