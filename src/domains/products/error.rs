//! Product API error types.

use thiserror::Error;

/// Failure talking to the product API over HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("API 요청 실패 ({status}): {message}")]
    Status { status: u16, message: String },

    /// No usable response: connection, timeout or body decoding failure.
    #[error("API 요청 실패 (unknown): {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

/// Errors returned by a [`ProductService`](super::ProductService).
///
/// Each variant prefixes the underlying API error with the operation that failed.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("제품 목록 조회 실패: {0}")]
    List(#[source] ApiError),

    #[error("제품 상세 조회 실패: {0}")]
    Detail(#[source] ApiError),

    #[error("제품 생성 실패: {0}")]
    Create(#[source] ApiError),

    #[error("연결 실패: {0}")]
    Connection(#[source] ApiError),
}
