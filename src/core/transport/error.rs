//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures while bringing up or running an MCP session.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The MCP handshake on the transport failed.
    #[error("Failed to start MCP session on {transport}: {message}")]
    InitError {
        transport: &'static str,
        message: String,
    },

    /// The running session ended abnormally.
    #[error("MCP session on {transport} ended with an error: {message}")]
    SessionError {
        transport: &'static str,
        message: String,
    },
}

impl TransportError {
    pub fn init(transport: &'static str, message: impl Into<String>) -> Self {
        Self::InitError {
            transport,
            message: message.into(),
        }
    }

    pub fn session(transport: &'static str, message: impl Into<String>) -> Self {
        Self::SessionError {
            transport,
            message: message.into(),
        }
    }
}
