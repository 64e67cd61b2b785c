//! Tiny Shop Core - Shared domain types.
//!
//! This crate provides the types used by the Tiny Shop components:
//! - `storefront` - HTTP service for search, cart and checkout
//! - `integration-tests` - End-to-end tests against a served router
//!
//! # Architecture
//!
//! The core crate contains only types and pure calculations - no I/O, no
//! locking, no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, products, cart items, orders and money formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
