//! Local cart commands.
//!
//! # Usage
//!
//! ```bash
//! emporium cart show
//! emporium cart add 1              # one unit
//! emporium cart add 1 -q 3         # three more units
//! emporium cart add 1 -q -2        # two fewer units
//! emporium cart set 1 5
//! emporium cart remove 1
//! emporium cart clear
//! ```
//!
//! The cart is restored from disk before each command and written back after
//! every change.

use clap::Subcommand;
use emporium_core::{Product, ProductId};
use emporium_storefront::cart::{CartStore, DEFAULT_QUANTITY};

use crate::client::{ClientError, ProductSource};

#[derive(Debug, Subcommand)]
pub enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add units of a product (negative quantities remove units)
    Add {
        /// Product ID
        id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = DEFAULT_QUANTITY, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: i32,
    },
    /// Set the quantity of a product already in the cart (0 removes it)
    Set {
        /// Product ID
        id: i32,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

/// Run a cart action against a restored cart.
///
/// Adding a product that is already in the cart reuses the stored snapshot,
/// so only products new to the cart are fetched from `source`.
///
/// # Errors
///
/// Returns `ClientError` if a product cannot be fetched or the cart cannot be
/// written.
pub async fn execute(
    action: CartAction,
    cart: &mut CartStore,
    source: &impl ProductSource,
) -> Result<(), ClientError> {
    match action {
        CartAction::Show => {}
        CartAction::Add { id, quantity } => {
            let id = ProductId::new(id);
            let product = product_for(cart, source, id).await?;
            cart.add(&product, quantity)?;
        }
        CartAction::Remove { id } => cart.remove(ProductId::new(id))?,
        CartAction::Set { id, quantity } => cart.set_quantity(ProductId::new(id), quantity)?,
        CartAction::Clear => cart.clear()?,
    }

    for line in render(cart) {
        tracing::info!("{line}");
    }
    Ok(())
}

async fn product_for(
    cart: &CartStore,
    source: &impl ProductSource,
    id: ProductId,
) -> Result<Product, ClientError> {
    if let Some(line) = cart.find_by_id(id) {
        return Ok(line.product.clone());
    }
    source.product(id).await
}

/// Cart contents as output lines.
#[must_use]
pub fn render(cart: &CartStore) -> Vec<String> {
    if cart.is_empty() {
        return vec!["Cart is empty".to_string()];
    }

    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|line| {
            format!(
                "{:>3} x {:<32} {:>9} each  {:>10}",
                line.quantity,
                line.product.name,
                line.product.price.display(),
                line.line_total().display()
            )
        })
        .collect();

    let count = cart.item_count();
    lines.push(format!(
        "{count} {}, total {}",
        if count == 1 { "item" } else { "items" },
        cart.total_price().display()
    ));
    lines
}
