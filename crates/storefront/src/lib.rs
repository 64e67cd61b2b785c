//! Tiny Shop Storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing it
//! to be tested and reused. The binary in `main.rs` only adds process wiring:
//! configuration, tracing, Sentry and the listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod order_log;
pub mod routes;
pub mod state;
