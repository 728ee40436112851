//! Product detail tool definition.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{
    as_i64, error_result, object_schema, pretty_json, provided, success_result,
};
use crate::domains::products::ProductService;
use crate::domains::tools::{ToolError, ToolHandler};

/// Text returned when no product id was given.
pub const MISSING_ID_MESSAGE: &str = "상품 ID를 입력해주세요.";

/// Fetches a single product by id.
pub struct GetProductDetailTool {
    service: Arc<dyn ProductService>,
}

impl GetProductDetailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_product_detail";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "상품 상세 정보를 조회합니다.";

    const FAILURE_PREFIX: &'static str = "상품 상세 조회 중 오류가 발생했습니다";

    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }

    async fn fetch(&self, id: &Value) -> Result<String, ToolError> {
        let id = as_i64(id).ok_or_else(|| {
            ToolError::invalid_arguments(format!("invalid 'id' parameter: {}", id))
        })?;
        info!("Fetching product {}", id);

        let product = self.service.get_product(id).await?;
        Ok(pretty_json(&product)?)
    }
}

#[async_trait]
impl ToolHandler for GetProductDetailTool {
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
                "id": {
                    "type": "number",
                    "description": "조회할 상품의 ID"
                }
            },
            "required": ["id"]
        }))
    }

    #[instrument(skip_all, fields(tool = "get_product_detail"))]
    async fn execute(&self, arguments: Value) -> CallToolResult {
        let Some(id) = provided(&arguments, "id") else {
            return error_result(MISSING_ID_MESSAGE);
        };

        match self.fetch(id).await {
            Ok(text) => success_result(text),
            Err(e) => error_result(format!("{}: {}", Self::FAILURE_PREFIX, e)),
        }
    }
}
