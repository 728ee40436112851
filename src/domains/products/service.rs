//! Product service - the boundary tools use to reach the product API.
//!
//! [`ProductService`] is the seam handlers depend on; [`HttpProductService`]
//! is the production implementation backed by [`ApiClient`].

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::client::ApiClient;
use super::error::ProductError;
use super::types::{CreateProductDto, ProductDto, ProductListDto, ProductsQueryParams};

/// Message returned when the connection probe succeeds.
pub const CONNECTION_OK_MESSAGE: &str = "연결 성공: 제품 API 서버가 정상적으로 응답하고 있습니다.";

/// Page requested when the caller does not choose one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size requested when the caller does not choose one.
pub const DEFAULT_LIMIT: u64 = 10;

/// Operations the product tools need from the product API.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List products, one page at a time.
    async fn list_products(
        &self,
        query: ProductsQueryParams,
    ) -> Result<ProductListDto, ProductError>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: i64) -> Result<ProductDto, ProductError>;

    /// Create a product and return it as stored by the API.
    async fn create_product(&self, data: CreateProductDto) -> Result<ProductDto, ProductError>;

    /// Probe the API and describe the outcome.
    async fn test_connection(&self) -> Result<String, ProductError>;
}

/// [`ProductService`] backed by the remote HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProductService {
    client: ApiClient,
}

impl HttpProductService {
    /// Create a new service over the given client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductService for HttpProductService {
    #[instrument(skip(self))]
    async fn list_products(
        &self,
        query: ProductsQueryParams,
    ) -> Result<ProductListDto, ProductError> {
        let query = ProductsQueryParams {
            page: query.page.filter(|p| *p > 0).or(Some(DEFAULT_PAGE)),
            limit: query.limit.filter(|l| *l > 0).or(Some(DEFAULT_LIMIT)),
            search: query.search,
        };

        self.client
            .get_with_query("/products", &query)
            .await
            .map_err(ProductError::List)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: i64) -> Result<ProductDto, ProductError> {
        self.client
            .get(&format!("/products/{}", id))
            .await
            .map_err(ProductError::Detail)
    }

    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create_product(&self, data: CreateProductDto) -> Result<ProductDto, ProductError> {
        let product: ProductDto = self
            .client
            .post("/products", &data)
            .await
            .map_err(ProductError::Create)?;

        info!("Created product {}", product.id);
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn test_connection(&self) -> Result<String, ProductError> {
        let probe = ProductsQueryParams {
            limit: Some(1),
            ..Default::default()
        };

        match self
            .client
            .get_with_query::<serde_json::Value, _>("/products", &probe)
            .await
        {
            Ok(_) => Ok(CONNECTION_OK_MESSAGE.to_string()),
            Err(e) => {
                warn!("Product API connection probe failed: {}", e);
                Err(ProductError::Connection(e))
            }
        }
    }
}
