//! Business logic services for storefront.
//!
//! # Services
//!
//! - `lookup` - Single-product lookup against the catalog, with simulated latency

pub mod lookup;

pub use lookup::{LookupError, LookupService, parse_product_id};
