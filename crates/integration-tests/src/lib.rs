//! Integration tests for Emporium.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p emporium-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_api` - HTTP surface of a real storefront server on an ephemeral port
//! - `cart_persistence` - Cart state surviving across sessions on disk

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use emporium_storefront::catalog::Catalog;
use emporium_storefront::config::StorefrontConfig;
use emporium_storefront::routes;
use emporium_storefront::state::AppState;

/// A storefront server running in the background of the current runtime.
pub struct TestServer {
    pub addr: SocketAddr,
}

impl TestServer {
    /// Start a storefront on `127.0.0.1:0` with the given lookup delay.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(lookup_delay: Duration) -> Self {
        let config = StorefrontConfig {
            port: 0,
            lookup_delay,
            ..StorefrontConfig::default()
        };
        let listener = tokio::net::TcpListener::bind(config.socket_addr())
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        let app = routes::app(AppState::new(config, Catalog::fixtures()));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// A fresh, not-yet-created directory under the system temp dir.
#[must_use]
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("emporium-it-{}", uuid::Uuid::new_v4()))
}
