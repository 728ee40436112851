//! API connection test tool definition.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::super::common::{object_schema, success_result};
use crate::domains::products::{ProductError, ProductService};
use crate::domains::tools::ToolHandler;

/// Probes the product API.
///
/// Always answers with a successful result; a failed probe is described in
/// the text as the service reports it (`연결 실패: …`).
pub struct TestApiConnectionTool {
    service: Arc<dyn ProductService>,
}

impl TestApiConnectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "test_api_connection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "제품 API 서버 연결을 테스트합니다.";

    const FAILURE_PREFIX: &'static str = "API 연결 테스트 중 오류가 발생했습니다";

    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ToolHandler for TestApiConnectionTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> JsonObject {
        object_schema(json!({
            "type": "object",
            "properties": {}
        }))
    }

    #[instrument(skip_all, fields(tool = "test_api_connection"))]
    async fn execute(&self, _arguments: Value) -> CallToolResult {
        let text = match self.service.test_connection().await {
            Ok(message) => {
                info!("Product API connection test passed");
                message
            }
            Err(e @ ProductError::Connection(_)) => {
                warn!("Product API connection test failed: {}", e);
                e.to_string()
            }
            Err(e) => {
                warn!("Product API connection test failed: {}", e);
                format!("{}: {}", Self::FAILURE_PREFIX, e)
            }
        };

        success_result(text)
    }
}
