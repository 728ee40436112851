//! HTTP client for the product API.
//!
//! Wraps a `reqwest::Client` rooted at the configured base URL. Every
//! request either decodes a JSON body or fails with a single [`ApiError`].

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::error::ApiError;
use crate::core::config::ApiConfig;

/// JSON-over-HTTP client for the product API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {base_url}{path}`.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    /// `GET {base_url}{path}?{query}`. `None` fields are left out of the query string.
    #[instrument(skip(self, query))]
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.http.get(self.url(path)).query(query)).await
    }

    /// `POST {base_url}{path}` with a JSON body.
    #[instrument(skip(self, body))]
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("Product API request failed: {}", e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        debug!("Product API responded with {}", status);

        if !status.is_success() {
            let message = error_message(status, response).await;
            warn!("Product API returned {}: {}", status, message);
            return Err(ApiError::status(status.as_u16(), message));
        }

        Ok(response.json::<T>().await?)
    }
}

/// Extract a human-readable message from an error response.
///
/// Prefers the body's `message` field (a string, or a list of strings joined
/// with commas), falling back to a generic status description.
async fn error_message(status: StatusCode, response: Response) -> String {
    let body = response.json::<serde_json::Value>().await.ok();

    let message = body.as_ref().and_then(|b| b.get("message")).and_then(|m| match m {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    });

    message.unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}
