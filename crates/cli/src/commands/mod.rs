//! CLI command implementations.
//!
//! - `product` - Product lookup and listing against the storefront server
//! - `cart` - Local cart management

pub mod cart;
pub mod product;
