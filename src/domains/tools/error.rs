//! Tool-specific error types.

use thiserror::Error;

use crate::domains::products::ProductError;

/// Errors that can occur during tool dispatch or execution.
///
/// Only [`ToolError::NotFound`] ever leaves the registry; the other variants
/// are turned into tool result text by the handler that raised them.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Arguments were present but could not be interpreted.
    #[error("{0}")]
    InvalidArguments(String),

    /// The product service reported a failure.
    #[error(transparent)]
    Service(#[from] ProductError),

    /// The result could not be rendered as JSON.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
