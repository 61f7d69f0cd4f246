//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `EMPORIUM_HOST` - Bind address (default: 127.0.0.1)
//! - `EMPORIUM_PORT` - Listen port (default: 3000)
//! - `EMPORIUM_LOOKUP_DELAY_MS` - Simulated product lookup latency (default: 200)
//! - `EMPORIUM_CONTEXT` - `server` (default) or `client`; `client` logs every navigation
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::storage::ExecutionContext;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront server configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Artificial delay before each product lookup resolves
    pub lookup_delay: Duration,
    /// Execution context the server reports to the navigation guard
    pub context: ExecutionContext,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production", "staging")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            lookup_delay: crate::services::lookup::DEFAULT_LOOKUP_DELAY,
            context: ExecutionContext::Server,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_var(&var, "EMPORIUM_HOST")?.unwrap_or(defaults.host);
        let port = parse_var(&var, "EMPORIUM_PORT")?.unwrap_or(defaults.port);
        let lookup_delay = parse_var::<u64>(&var, "EMPORIUM_LOOKUP_DELAY_MS")?
            .map_or(defaults.lookup_delay, Duration::from_millis);
        let context = parse_var(&var, "EMPORIUM_CONTEXT")?.unwrap_or(defaults.context);

        let sentry_sample_rate =
            parse_var(&var, "SENTRY_SAMPLE_RATE")?.unwrap_or(defaults.sentry_sample_rate);
        let sentry_traces_sample_rate = parse_var(&var, "SENTRY_TRACES_SAMPLE_RATE")?
            .unwrap_or(defaults.sentry_traces_sample_rate);

        Ok(Self {
            host,
            port,
            lookup_delay,
            context,
            sentry_dsn: var("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: var("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, reporting unparseable values.
pub fn parse_var<T>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
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
        let config = StorefrontConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.lookup_delay, Duration::from_millis(200));
        assert_eq!(config.context, ExecutionContext::Server);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_vars(vars(&[
            ("EMPORIUM_HOST", "0.0.0.0"),
            ("EMPORIUM_PORT", "8080"),
            ("EMPORIUM_LOOKUP_DELAY_MS", "0"),
            ("EMPORIUM_CONTEXT", "client"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.lookup_delay, Duration::ZERO);
        assert_eq!(config.context, ExecutionContext::Client);
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_invalid_port() {
        let err = StorefrontConfig::from_vars(vars(&[("EMPORIUM_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "EMPORIUM_PORT"));
    }

    #[test]
    fn test_invalid_context() {
        let err =
            StorefrontConfig::from_vars(vars(&[("EMPORIUM_CONTEXT", "browser")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_empty_sentry_dsn_is_none() {
        let config = StorefrontConfig::from_vars(vars(&[("SENTRY_DSN", "")])).unwrap();
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::default();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
