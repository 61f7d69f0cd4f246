//! Cart store: the single owner of a session's cart.
//!
//! Every mutation funnels through [`CartStore`], which writes the full line
//! item list to its [`KeyValueStore`] under [`CART_STORAGE_KEY`] after each
//! change. [`CartStore::restore`] is the only reader.
//!
//! # Example
//!
//! ```rust
//! use emporium_storefront::cart::CartStore;
//! use emporium_storefront::catalog::Catalog;
//! use emporium_storefront::storage::MemoryStore;
//! use emporium_core::ProductId;
//!
//! let catalog = Catalog::fixtures();
//! let headphones = catalog.find(ProductId::new(1)).unwrap();
//!
//! let mut cart = CartStore::new(Box::new(MemoryStore::new()));
//! cart.restore();
//! cart.add(headphones, 2).unwrap();
//! assert_eq!(cart.item_count(), 2);
//! ```

use std::num::NonZeroU32;

use emporium_core::{CartLineItem, Price, Product, ProductId, cart};
use thiserror::Error;

use crate::storage::{self, KeyValueStore, StorageError};

/// The single storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Quantity used when the caller does not specify one.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Reasons a persisted snapshot was discarded during restore.
#[derive(Debug, Error)]
enum SnapshotError {
    #[error("storage read failed: {0}")]
    Storage(#[from] StorageError),

    #[error("malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot lists the same product more than once")]
    DuplicateLines,

    #[error("snapshot total exceeds the largest representable price")]
    TotalOverflow,
}

/// Holds the cart's line items and keeps them persisted.
pub struct CartStore {
    items: Vec<CartLineItem>,
    loaded: bool,
    storage: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create an empty, not-yet-restored cart over the given storage.
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            storage,
        }
    }

    /// Load the persisted cart, once per session.
    ///
    /// A missing snapshot yields an empty cart. An unreadable or malformed one
    /// also yields an empty cart; the failure is logged and not returned.
    pub fn restore(&mut self) {
        if self.loaded {
            return;
        }

        self.items = match self.read_snapshot() {
            Ok(Some(items)) => {
                tracing::debug!(lines = items.len(), "Restored cart");
                items
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load cart");
                Vec::new()
            }
        };
        self.loaded = true;
    }

    fn read_snapshot(&self) -> Result<Option<Vec<CartLineItem>>, SnapshotError> {
        let Some(raw) = self.storage.read(CART_STORAGE_KEY)? else {
            return Ok(None);
        };
        let items: Vec<CartLineItem> = serde_json::from_str(&raw)?;
        if !cart::has_unique_ids(&items) {
            return Err(SnapshotError::DuplicateLines);
        }
        if cart::checked_total_price(&items).is_none() {
            return Err(SnapshotError::TotalOverflow);
        }
        Ok(Some(items))
    }

    fn save(&self) -> Result<(), StorageError> {
        storage::write_json(self.storage.as_ref(), CART_STORAGE_KEY, &self.items)
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line keeps its stored product snapshot and only has its
    /// quantity adjusted. `quantity` is a signed delta: a non-positive value
    /// decrements an existing line, removing it once it reaches zero, and is
    /// ignored for a product that is not in the cart. Products without a
    /// valid (positive) identifier are ignored. A resulting quantity above
    /// `u32::MAX` is clamped to `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be persisted.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), StorageError> {
        if !product.id.is_valid() {
            tracing::warn!(product_id = %product.id, "Ignoring add for product without a valid id");
            return Ok(());
        }

        let position = self.position(product.id);

        match position {
            Some(index) => {
                let Some(line) = self.items.get_mut(index) else {
                    return Ok(());
                };
                let updated = i64::from(line.quantity.get()).saturating_add(quantity);
                match to_quantity(updated) {
                    Some(q) => line.quantity = q,
                    None => {
                        self.items.remove(index);
                    }
                }
            }
            None => {
                let Some(q) = to_quantity(quantity) else {
                    tracing::debug!(product_id = %product.id, quantity, "Ignoring non-positive add for product not in cart");
                    return Ok(());
                };
                self.items.push(CartLineItem::new(product.clone(), q));
            }
        }

        tracing::debug!(product_id = %product.id, quantity, "Added to cart");
        self.save()
    }

    /// Add a single unit of `product`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be persisted.
    pub fn add_one(&mut self, product: &Product) -> Result<(), StorageError> {
        self.add(product, DEFAULT_QUANTITY)
    }

    /// Remove the line for `id`. Does nothing, and writes nothing, if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be persisted.
    pub fn remove(&mut self, id: ProductId) -> Result<(), StorageError> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };
        self.items.remove(index);
        tracing::debug!(product_id = %id, "Removed from cart");
        self.save()
    }

    /// Set the quantity for `id`. Zero or below removes the line; an absent
    /// product is left alone. Values above `u32::MAX` are clamped to it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated cart cannot be persisted.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), StorageError> {
        let Some(q) = to_quantity(quantity) else {
            return self.remove(id);
        };
        let Some(line) = self.items.iter_mut().find(|line| line.id() == id) else {
            return Ok(());
        };
        line.quantity = q;
        tracing::debug!(product_id = %id, quantity, "Updated cart quantity");
        self.save()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the empty cart cannot be persisted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.save()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        cart::item_count(&self.items)
    }

    /// Sum of every line's price times quantity.
    #[must_use]
    pub fn total_price(&self) -> Price {
        cart::total_price(&self.items)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&CartLineItem> {
        cart::find_by_id(&self.items, id)
    }

    /// Whether [`restore`](Self::restore) has run this session.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|line| line.id() == id)
    }
}

/// Clamp a signed quantity into the stored representation. `None` means the
/// line should not exist.
fn to_quantity(quantity: i64) -> Option<NonZeroU32> {
    if quantity <= 0 {
        return None;
    }
    let clamped = u32::try_from(quantity).unwrap_or_else(|_| {
        tracing::debug!(quantity, max = u32::MAX, "Clamping cart quantity");
        u32::MAX
    });
    NonZeroU32::new(clamped)
}
