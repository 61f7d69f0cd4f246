//! Product lookup service.
//!
//! Resolves a product identifier against the catalog after a fixed artificial
//! delay, standing in for a slow upstream data source. Each lookup is a single
//! shot: no retries, and the delay is not cancellable from inside the service.

use std::sync::Arc;
use std::time::Duration;

use emporium_core::{Product, ProductId};
use thiserror::Error;
use tracing::instrument;

use crate::catalog::Catalog;

/// Default simulated latency.
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(200);

/// Errors that can occur during a product lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No catalog product has this identifier.
    #[error("Product not found")]
    NotFound(ProductId),
}

/// Looks products up in a shared catalog.
#[derive(Debug, Clone)]
pub struct LookupService {
    catalog: Arc<Catalog>,
    delay: Duration,
}

impl LookupService {
    /// Create a lookup service over `catalog` with the given simulated delay.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    /// The simulated latency applied to each lookup.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolve `id` to a product after the configured delay.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NotFound` if the catalog has no such product.
    #[instrument(skip(self))]
    pub async fn lookup(&self, id: ProductId) -> Result<Product, LookupError> {
        tokio::time::sleep(self.delay).await;

        self.catalog.find(id).cloned().ok_or_else(|| {
            tracing::debug!(product_id = %id, "Product lookup missed");
            LookupError::NotFound(id)
        })
    }
}

/// Parse a product identifier from a raw path segment.
///
/// Lenient in the same way as a browser's `parseInt`: surrounding whitespace
/// and a sign are accepted, and parsing stops at the first non-digit
/// (`"12abc"` is 12). Anything without leading digits, or out of range,
/// becomes 0, which never matches a product.
#[must_use]
pub fn parse_product_id(raw: &str) -> ProductId {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = rest.get(..digits_len).unwrap_or_default();

    let value = digits.parse::<i32>().map_or(0, |n| if negative { -n } else { n });
    ProductId::new(value)
}
