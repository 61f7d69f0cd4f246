//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `EMPORIUM_BASE_URL` - Storefront server to fetch products from (default: http://127.0.0.1:3000)
//! - `EMPORIUM_DATA_DIR` - Directory holding the persisted cart (default: .emporium)
//! - `EMPORIUM_CONTEXT` - `client` (default) or `server`; `server` disables persistence

use std::path::PathBuf;

use emporium_storefront::config::{ConfigError, parse_var};
use emporium_storefront::storage::ExecutionContext;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_DATA_DIR: &str = ".emporium";

/// CLI client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Storefront base URL, always ending in `/`
    pub base_url: Url,
    /// Where durable client state lives
    pub data_dir: PathBuf,
    /// Selects the cart's storage backend
    pub context: ExecutionContext,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = var("EMPORIUM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&raw_url)?;

        let data_dir = var("EMPORIUM_DATA_DIR")
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let context = parse_var(&var, "EMPORIUM_CONTEXT")?.unwrap_or(ExecutionContext::Client);

        Ok(Self {
            base_url,
            data_dir,
            context,
        })
    }
}

/// Parse a base URL and make sure relative joins keep its path.
fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar("EMPORIUM_BASE_URL".to_string(), msg);

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(config.data_dir, PathBuf::from(".emporium"));
        assert_eq!(config.context, ExecutionContext::Client);
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let config =
            ClientConfig::from_vars(vars(&[("EMPORIUM_BASE_URL", "https://shop.example/store")]))
                .unwrap();
        assert_eq!(config.base_url.as_str(), "https://shop.example/store/");
        assert_eq!(
            config.base_url.join("api/products/1").unwrap().as_str(),
            "https://shop.example/store/api/products/1"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(ClientConfig::from_vars(vars(&[("EMPORIUM_BASE_URL", "not a url")])).is_err());
        assert!(ClientConfig::from_vars(vars(&[("EMPORIUM_BASE_URL", "ftp://shop")])).is_err());
    }

    #[test]
    fn test_server_context() {
        let config = ClientConfig::from_vars(vars(&[
            ("EMPORIUM_CONTEXT", "server"),
            ("EMPORIUM_DATA_DIR", "/tmp/emporium-cart"),
        ]))
        .unwrap();
        assert_eq!(config.context, ExecutionContext::Server);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/emporium-cart"));
    }
}
