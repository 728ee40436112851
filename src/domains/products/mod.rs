//! Products domain module.
//!
//! Everything the server knows about the remote product API lives here:
//!
//! - `types.rs` - DTOs mirrored from the API
//! - `client.rs` - reqwest-based JSON client
//! - `service.rs` - the `ProductService` boundary and its HTTP implementation
//! - `error.rs` - API and service error types

mod client;
mod error;
mod service;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ProductError};
pub use service::{
    CONNECTION_OK_MESSAGE, DEFAULT_LIMIT, DEFAULT_PAGE, HttpProductService, ProductService,
};
pub use types::{CreateProductDto, ProductDto, ProductListDto, ProductsQueryParams};
