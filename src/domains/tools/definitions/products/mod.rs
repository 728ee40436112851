//! Product API tools.

pub mod create_product;
pub mod get_product_detail;
pub mod get_products;
pub mod test_api_connection;

pub use create_product::CreateProductTool;
pub use get_product_detail::GetProductDetailTool;
pub use get_products::GetProductsTool;
pub use test_api_connection::TestApiConnectionTool;
