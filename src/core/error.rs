//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error raised while building the HTTP client.
    #[error("API client error: {0}")]
    Api(#[from] crate::domains::products::ApiError),

    /// Error raised by the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::{resources::ResourceError, tools::ToolError};

    #[test]
    fn test_domain_errors_convert() {
        let err: Error = ToolError::not_found("delete_product").into();
        assert_eq!(err.to_string(), "Tool error: Unknown tool: delete_product");

        let err: Error = ResourceError::not_found("test:///missing").into();
        assert!(matches!(err, Error::Resource(_)));
    }

    #[test]
    fn test_api_error_converts() {
        let err: Error = crate::domains::products::ApiError::status(502, "Bad Gateway").into();
        assert_eq!(
            err.to_string(),
            "API client error: API 요청 실패 (502): Bad Gateway"
        );
    }
}
