//! Core types for Tiny Shop.
//!
//! This module provides type-safe wrappers for the shop's domain concepts.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;

pub use cart::{CartItem, total_of};
pub use id::*;
pub use order::Order;
pub use price::format_amount;
pub use product::Product;
