//! Cart line items and the views derived from them.
//!
//! The derived views are plain functions over a slice of line items so they
//! can be exercised without a cart store or any storage behind it.

use std::collections::HashSet;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// A cart entry: a snapshot of the product plus how many units are wanted.
///
/// Serializes as the product's fields with an extra `quantity` field, e.g.
/// `{"id":1,"name":"...","price":299.99,...,"quantity":3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    /// Create a line item from a product snapshot.
    #[must_use]
    pub const fn new(product: Product, quantity: NonZeroU32) -> Self {
        Self { product, quantity }
    }

    /// The product identifier this line belongs to.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity, saturating at [`Price::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }

    /// Unit price times quantity, or `None` if it overflows.
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Price> {
        self.product.price.checked_times(self.quantity.get())
    }
}

/// Sum of all quantities. Zero for an empty cart.
#[must_use]
pub fn item_count(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity.get())).sum()
}

/// Sum of unit price times quantity over every line. Zero for an empty cart.
///
/// Saturates at [`Price::MAX`]. Carts restored from storage have already
/// passed [`checked_total_price`], so they never get there.
#[must_use]
pub fn total_price(items: &[CartLineItem]) -> Price {
    items.iter().map(CartLineItem::line_total).sum()
}

/// Like [`total_price`], but `None` if any line or the sum overflows.
#[must_use]
pub fn checked_total_price(items: &[CartLineItem]) -> Option<Price> {
    items.iter().try_fold(Price::ZERO, |total, item| {
        total.checked_add(item.checked_line_total()?)
    })
}

/// The line for `id`, if the cart holds one.
#[must_use]
pub fn find_by_id(items: &[CartLineItem], id: ProductId) -> Option<&CartLineItem> {
    items.iter().find(|item| item.id() == id)
}

/// Whether every line belongs to a distinct product.
#[must_use]
pub fn has_unique_ids(items: &[CartLineItem]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Price::from_cents(cents).unwrap(),
            image: String::new(),
            category: "Test".to_string(),
            stock: 10,
            rating: 4.0,
            features: Vec::new(),
        }
    }

    fn line(id: i32, cents: i64, quantity: u32) -> CartLineItem {
        CartLineItem::new(product(id, cents), NonZeroU32::new(quantity).unwrap())
    }

    #[test]
    fn test_empty_cart_views() {
        assert_eq!(item_count(&[]), 0);
        assert_eq!(total_price(&[]), Price::ZERO);
        assert!(find_by_id(&[], ProductId::new(1)).is_none());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let items = vec![line(1, 1_000, 2), line(2, 500, 3)];
        assert_eq!(item_count(&items), 5);
    }

    #[test]
    fn test_total_price_sums_line_totals() {
        let items = vec![line(1, 29_999, 2), line(3, 2_999, 1)];
        assert_eq!(total_price(&items), Price::from_cents(62_997).unwrap());
    }

    #[test]
    fn test_checked_total_price_detects_overflow() {
        let items = vec![line(1, 29_999, 2), line(3, 2_999, 1)];
        assert_eq!(checked_total_price(&items), Some(total_price(&items)));

        let mut huge = line(2, 100, 3);
        huge.product.price = Price::MAX;
        assert_eq!(huge.checked_line_total(), None);
        assert_eq!(huge.line_total(), Price::MAX);

        let mut items = vec![line(1, 100, 1), huge];
        assert_eq!(checked_total_price(&items), None);
        assert_eq!(total_price(&items), Price::MAX);

        items.pop();
        items.push({
            let mut max = line(4, 100, 1);
            max.product.price = Price::MAX;
            max
        });
        assert_eq!(checked_total_price(&items), None);
    }

    #[test]
    fn test_find_by_id() {
        let items = vec![line(1, 100, 1), line(7, 200, 4)];
        let found = find_by_id(&items, ProductId::new(7)).unwrap();
        assert_eq!(found.quantity.get(), 4);
        assert!(find_by_id(&items, ProductId::new(2)).is_none());
    }

    #[test]
    fn test_has_unique_ids() {
        assert!(has_unique_ids(&[line(1, 100, 1), line(2, 100, 1)]));
        assert!(!has_unique_ids(&[line(1, 100, 1), line(1, 100, 2)]));
    }

    #[test]
    fn test_line_item_json_is_flat() {
        let json = serde_json::to_value(line(1, 29_999, 3)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["name"], "Product 1");
        assert!(json.get("product").is_none());
    }

    #[test]
    fn test_line_item_rejects_zero_quantity() {
        let mut json = serde_json::to_value(line(1, 100, 1)).unwrap();
        json["quantity"] = serde_json::json!(0);
        assert!(serde_json::from_value::<CartLineItem>(json).is_err());
    }
}
