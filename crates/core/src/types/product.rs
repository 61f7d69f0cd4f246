//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A catalog product.
///
/// Products are created once when the catalog is built and are never mutated
/// afterwards. Cart line items carry a flattened copy of every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub category: String,
    /// Units in stock.
    pub stock: u32,
    /// Average review rating out of 5.
    pub rating: f32,
    /// Feature bullet points, in display order.
    pub features: Vec<String>,
}
