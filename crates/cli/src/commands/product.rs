//! Product lookup commands.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! emporium products
//!
//! # Show one product
//! emporium product 1
//! ```

use emporium_core::{Product, ProductId};

use crate::client::{ClientError, ProductClient};

/// One-line summary used in listings.
#[must_use]
pub fn summary_line(product: &Product) -> String {
    format!(
        "#{:<3} {:<32} {:>9}  [{}]",
        product.id,
        product.name,
        product.price.display(),
        product.category
    )
}

/// Full description of a product, one output line per entry.
#[must_use]
pub fn describe(product: &Product) -> Vec<String> {
    let mut lines = vec![
        format!("{} (#{})", product.name, product.id),
        product.description.clone(),
        format!("Price:    {}", product.price.display()),
        format!("Category: {}", product.category),
        format!("In stock: {}", product.stock),
        format!("Rating:   {:.1} / 5", product.rating),
    ];
    if !product.features.is_empty() {
        lines.push("Features:".to_string());
        lines.extend(product.features.iter().map(|f| format!("  - {f}")));
    }
    lines
}

/// Print every catalog product.
///
/// # Errors
///
/// Returns `ClientError` if the storefront cannot be reached.
pub async fn list(client: &ProductClient) -> Result<(), ClientError> {
    let products = client.list_products().await?;
    for product in &products {
        tracing::info!("{}", summary_line(product));
    }
    tracing::info!("{} products", products.len());
    Ok(())
}

/// Print a single product.
///
/// # Errors
///
/// Returns `ClientError::Api` (404) if the product does not exist.
pub async fn show(client: &ProductClient, id: ProductId) -> Result<(), ClientError> {
    let product = client.get_product(id).await?;
    for line in describe(&product) {
        tracing::info!("{line}");
    }
    Ok(())
}
