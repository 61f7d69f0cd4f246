//! In-memory product catalog.
//!
//! The catalog is built once at startup and never mutated, so it is shared
//! across handlers behind an `Arc` without any locking.

mod fixtures;

use emporium_core::{Product, ProductId};

/// Immutable list of products, queried by identifier.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an arbitrary product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in fixture catalog (12 products, ids 1 through 12).
    #[must_use]
    pub fn fixtures() -> Self {
        Self::new(fixtures::products())
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
