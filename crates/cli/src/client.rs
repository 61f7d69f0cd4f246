//! HTTP client for the storefront product API.

use emporium_core::{Product, ProductId};
use emporium_storefront::error::ErrorBody;
use emporium_storefront::storage::StorageError;
use emporium_storefront::config::ConfigError;
use thiserror::Error;
use url::Url;

/// Errors that can occur while running a client command.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storefront answered with an error status.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The cart could not be persisted.
    #[error("Cart storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Somewhere products can be fetched from.
pub(crate) trait ProductSource {
    async fn product(&self, id: ProductId) -> Result<Product, ClientError>;
}

/// Client for the storefront's `/api/products` endpoints.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ProductClient {
    /// Create a client for the storefront at `base_url` (must end in `/`).
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch one product. Resolves after the server's simulated delay.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 for unknown products, or
    /// `ClientError::Http` if the server cannot be reached.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        let url = self.base_url.join(&format!("api/products/{id}"))?;
        self.get_json(url).await
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request fails or the server reports an error.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.base_url.join("api/products")?;
        self.get_json(url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        Err(api_error(status.as_u16(), &text))
    }
}

impl ProductSource for ProductClient {
    async fn product(&self, id: ProductId) -> Result<Product, ClientError> {
        self.get_product(id).await
    }
}

/// Turn an error response into `ClientError::Api`, preferring the server's
/// own message when the body is the usual JSON error shape.
fn api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| {
            if body.trim().is_empty() {
                "Request failed".to_string()
            } else {
                body.trim().to_string()
            }
        },
        |parsed| parsed.status_message,
    );
    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_uses_server_message() {
        let err = api_error(404, r#"{"statusCode":404,"statusMessage":"Product not found"}"#);
        assert_eq!(err.to_string(), "Product not found (HTTP 404)");
    }

    #[test]
    fn test_api_error_falls_back_to_body_text() {
        assert_eq!(
            api_error(502, "bad gateway").to_string(),
            "bad gateway (HTTP 502)"
        );
        assert_eq!(api_error(500, "").to_string(), "Request failed (HTTP 500)");
    }
}
