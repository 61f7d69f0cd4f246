//! Emporium Storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing
//! it to be tested and reused by the CLI client:
//!
//! - [`catalog`] and [`services::lookup`] serve products
//! - [`cart`] and [`storage`] keep a durable cart on the client
//! - [`middleware::navigation`] guards the admin area

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
