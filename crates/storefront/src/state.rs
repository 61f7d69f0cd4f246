//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::LookupService;
use crate::storage::ExecutionContext;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and everything behind it is
/// immutable after startup, so handlers never contend on a lock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    lookup: LookupService,
}

impl AppState {
    /// Create a new application state over the given catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let lookup = LookupService::new(Arc::clone(&catalog), config.lookup_delay);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                lookup,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the product lookup service.
    #[must_use]
    pub fn lookup(&self) -> &LookupService {
        &self.inner.lookup
    }

    /// The execution context requests are handled in.
    #[must_use]
    pub fn context(&self) -> ExecutionContext {
        self.inner.config.context
    }
}
