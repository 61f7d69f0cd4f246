//! Emporium Core - Shared types library.
//!
//! This crate provides the types used across all Emporium components:
//! - `storefront` - Product lookup server and the cart store
//! - `cli` - Interactive client that keeps a durable local cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices, plus the product record
//! - [`cart`] - Cart line items and the derived views computed over them

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::CartLineItem;
pub use types::*;
