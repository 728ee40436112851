//! Test doubles for the tools domain.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Map, Number};
use std::sync::Mutex;

use crate::domains::products::{
    ApiError, CONNECTION_OK_MESSAGE, CreateProductDto, ProductDto, ProductError, ProductListDto,
    ProductService, ProductsQueryParams,
};

/// A call received by [`StubProductService`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ProductsQueryParams),
    Get(i64),
    Create(CreateProductDto),
    TestConnection,
}

/// Records every call; echoes inputs back, or fails every call with a status error.
#[derive(Default)]
pub struct StubProductService {
    calls: Mutex<Vec<Call>>,
    failure: Option<(u16, String)>,
}

impl StubProductService {
    pub fn echoing() -> Self {
        Self::default()
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some((status, message.to_string())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, wrap: fn(ApiError) -> ProductError) -> Result<(), ProductError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((status, message)) => Err(wrap(ApiError::status(*status, message.clone()))),
            None => Ok(()),
        }
    }
}

pub fn sample_product(id: i64) -> ProductDto {
    ProductDto {
        id,
        name: "Desk lamp".to_string(),
        description: "LED lamp".to_string(),
        price: Number::from(25),
        stock_quantity: 4,
        image_url: None,
        created_at: Some("2024-03-01T10:00:00Z".to_string()),
        updated_at: Some("2024-03-01T10:00:00Z".to_string()),
        extra: Map::new(),
    }
}

#[async_trait]
impl ProductService for StubProductService {
    async fn list_products(
        &self,
        query: ProductsQueryParams,
    ) -> Result<ProductListDto, ProductError> {
        self.record(Call::List(query.clone()), ProductError::List)?;
        Ok(ProductListDto {
            items: vec![sample_product(1)],
            total: 1,
            page: query.page.unwrap_or(1),
            limit: query.limit.unwrap_or(10),
            extra: Map::new(),
        })
    }

    async fn get_product(&self, id: i64) -> Result<ProductDto, ProductError> {
        self.record(Call::Get(id), ProductError::Detail)?;
        Ok(sample_product(id))
    }

    async fn create_product(&self, data: CreateProductDto) -> Result<ProductDto, ProductError> {
        self.record(Call::Create(data.clone()), ProductError::Create)?;
        Ok(ProductDto {
            id: 100,
            name: data.name,
            description: data.description,
            price: data.price,
            stock_quantity: data.stock_quantity,
            image_url: data.image_url,
            created_at: Some("2024-03-01T10:00:00Z".to_string()),
            updated_at: Some("2024-03-01T10:00:00Z".to_string()),
            extra: Map::new(),
        })
    }

    async fn test_connection(&self) -> Result<String, ProductError> {
        self.record(Call::TestConnection, ProductError::Connection)?;
        Ok(CONNECTION_OK_MESSAGE.to_string())
    }
}

/// Extract the single text item of a tool result.
pub fn text_of(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
