//! Product creation tool definition.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, is_falsy, object_schema, pretty_json, success_result};
use crate::domains::products::{CreateProductDto, ProductService};
use crate::domains::tools::{ToolError, ToolHandler};

/// Arguments that must be present (and truthy) before the API is called.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "price", "stockQuantity"];

/// Creates a new product.
pub struct CreateProductTool {
    service: Arc<dyn ProductService>,
}

impl CreateProductTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_product";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "새로운 상품을 생성합니다.";

    const SUCCESS_PREFIX: &'static str = "상품이 성공적으로 생성되었습니다";
    const FAILURE_PREFIX: &'static str = "상품 생성 중 오류가 발생했습니다";

    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }

    /// Required fields that are absent or falsy, in declaration order.
    ///
    /// A price or stock quantity of `0` and an empty string count as missing.
    pub fn missing_fields(arguments: &Value) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| arguments.get(*field).is_none_or(is_falsy))
            .collect()
    }

    async fn create(&self, arguments: Value) -> Result<String, ToolError> {
        let data: CreateProductDto = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        info!("Creating product: {}", data.name);

        let created = self.service.create_product(data).await?;
        Ok(format!("{}:\n{}", Self::SUCCESS_PREFIX, pretty_json(&created)?))
    }
}

#[async_trait]
impl ToolHandler for CreateProductTool {
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
                "name": {
                    "type": "string",
                    "description": "상품명"
                },
                "description": {
                    "type": "string",
                    "description": "상품 설명"
                },
                "price": {
                    "type": "number",
                    "description": "가격"
                },
                "stockQuantity": {
                    "type": "number",
                    "description": "재고 수량"
                },
                "imageUrl": {
                    "type": "string",
                    "description": "이미지 URL (선택사항)"
                }
            },
            "required": REQUIRED_FIELDS
        }))
    }

    #[instrument(skip_all, fields(tool = "create_product"))]
    async fn execute(&self, arguments: Value) -> CallToolResult {
        let missing = Self::missing_fields(&arguments);
        if !missing.is_empty() {
            return error_result(format!(
                "다음 필수 정보가 누락되었습니다: {}",
                missing.join(", ")
            ));
        }

        match self.create(arguments).await {
            Ok(text) => success_result(text),
            Err(e) => error_result(format!("{}: {}", Self::FAILURE_PREFIX, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::products::ProductDto;
    use crate::domains::tools::testing::{Call, StubProductService, is_error, text_of};

    fn tool_with(stub: &Arc<StubProductService>) -> CreateProductTool {
        CreateProductTool::new(stub.clone())
    }

    #[tokio::test]
    async fn test_missing_fields_are_named() {
        let stub = Arc::new(StubProductService::echoing());
        let result = tool_with(&stub)
            .execute(json!({ "name": "A", "description": "B" }))
            .await;

        assert_eq!(
            text_of(&result),
            "다음 필수 정보가 누락되었습니다: price, stockQuantity"
        );
        assert!(stub.calls().is_empty());
    }

    #[test]
    fn test_zero_and_empty_count_as_missing() {
        let missing = CreateProductTool::missing_fields(&json!({
            "name": "",
            "description": "B",
            "price": 0,
            "stockQuantity": 3
        }));
        assert_eq!(missing, vec!["name", "price"]);

        assert_eq!(
            CreateProductTool::missing_fields(&json!(null)),
            REQUIRED_FIELDS.to_vec()
        );
    }

    #[tokio::test]
    async fn test_creates_and_echoes_product() {
        let stub = Arc::new(StubProductService::echoing());
        let result = tool_with(&stub)
            .execute(json!({
                "name": "A",
                "description": "B",
                "price": 10,
                "stockQuantity": 5
            }))
            .await;

        assert!(!is_error(&result));
        let expected = CreateProductDto {
            name: "A".to_string(),
            description: "B".to_string(),
            price: serde_json::Number::from(10),
            stock_quantity: 5,
            image_url: None,
        };
        assert_eq!(stub.calls(), vec![Call::Create(expected)]);

        let text = text_of(&result);
        let (prefix, body) = text.split_once('\n').unwrap();
        assert_eq!(prefix, "상품이 성공적으로 생성되었습니다:");
        let created: ProductDto = serde_json::from_str(body).unwrap();
        assert_eq!(created.name, "A");
        assert_eq!(created.stock_quantity, 5);
        assert_eq!(body, serde_json::to_string_pretty(&created).unwrap());
        assert!(body.contains("\"price\": 10,"));
    }

    #[tokio::test]
    async fn test_image_url_is_forwarded() {
        let stub = Arc::new(StubProductService::echoing());
        tool_with(&stub)
            .execute(json!({
                "name": "A",
                "description": "B",
                "price": 1.5,
                "stockQuantity": 2,
                "imageUrl": "https://img.example.com/a.png"
            }))
            .await;

        match &stub.calls()[0] {
            Call::Create(data) => {
                assert_eq!(data.image_url.as_deref(), Some("https://img.example.com/a.png"))
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_type_reports_failure() {
        let stub = Arc::new(StubProductService::echoing());
        let result = tool_with(&stub)
            .execute(json!({
                "name": "A",
                "description": "B",
                "price": "ten",
                "stockQuantity": 5
            }))
            .await;

        assert!(is_error(&result));
        assert!(text_of(&result).starts_with("상품 생성 중 오류가 발생했습니다: "));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_becomes_text() {
        let stub = Arc::new(StubProductService::failing(400, "name already exists"));
        let result = tool_with(&stub)
            .execute(json!({
                "name": "A",
                "description": "B",
                "price": 10,
                "stockQuantity": 5
            }))
            .await;

        assert_eq!(
            text_of(&result),
            "상품 생성 중 오류가 발생했습니다: 제품 생성 실패: API 요청 실패 (400): name already exists"
        );
    }
}
