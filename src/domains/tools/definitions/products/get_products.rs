//! Product list tool definition.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{
    as_u64, error_result, object_schema, pretty_json, provided, success_result,
};
use crate::domains::products::{DEFAULT_PAGE, ProductService, ProductsQueryParams};
use crate::domains::tools::{ToolError, ToolHandler};

/// Lists products page by page, optionally filtered by a search term.
pub struct GetProductsTool {
    service: Arc<dyn ProductService>,
}

impl GetProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "상품 목록을 조회합니다. 페이지, 한 페이지당 항목 수, 검색어를 지정할 수 있습니다.";

    const FAILURE_PREFIX: &'static str = "상품 목록 조회 중 오류가 발생했습니다";

    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }

    /// Build the list query from raw arguments.
    ///
    /// `page` falls back to the first page when missing or falsy; `limit` and
    /// `search` are forwarded untouched. A value that is present but cannot
    /// be read as the expected type is rejected rather than dropped.
    pub fn query_from(arguments: &Value) -> Result<ProductsQueryParams, ToolError> {
        let page = match provided(arguments, "page") {
            Some(page) => as_u64(page).ok_or_else(|| invalid("page", page))?,
            None => DEFAULT_PAGE,
        };

        let limit = match arguments.get("limit") {
            None | Some(Value::Null) => None,
            Some(limit) => Some(as_u64(limit).ok_or_else(|| invalid("limit", limit))?),
        };

        let search = match arguments.get("search") {
            None | Some(Value::Null) => None,
            Some(Value::String(search)) => Some(search.clone()),
            Some(other) => return Err(invalid("search", other)),
        };

        Ok(ProductsQueryParams {
            page: Some(page),
            limit,
            search,
        })
    }

    async fn list(&self, arguments: &Value) -> Result<String, ToolError> {
        let query = Self::query_from(arguments)?;
        info!(
            "Listing products (page: {:?}, limit: {:?}, search: {:?})",
            query.page, query.limit, query.search
        );

        let products = self.service.list_products(query).await?;
        Ok(pretty_json(&products)?)
    }
}

fn invalid(name: &str, value: &Value) -> ToolError {
    ToolError::invalid_arguments(format!("invalid '{}' parameter: {}", name, value))
}

#[async_trait]
impl ToolHandler for GetProductsTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> JsonObject {
        object_schema(json!({
            "type": "object",
            "properties": {
                "page": {
                    "type": "number",
                    "description": "페이지 번호 (기본값: 1)"
                },
                "limit": {
                    "type": "number",
                    "description": "페이지당 항목 수 (기본값: 10)"
                },
                "search": {
                    "type": "string",
                    "description": "검색어"
                }
            }
        }))
    }

    #[instrument(skip_all, fields(tool = "get_products"))]
    async fn execute(&self, arguments: Value) -> CallToolResult {
        match self.list(&arguments).await {
            Ok(text) => success_result(text),
            Err(e) => error_result(format!("{}: {}", Self::FAILURE_PREFIX, e)),
        }
    }
}
