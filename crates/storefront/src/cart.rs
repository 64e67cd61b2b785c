//! Shared in-memory cart.
//!
//! The cart is a single ordered list of items owned by [`CartStore`]. The list
//! is only reachable through the store's atomic operations; each one runs
//! inside a single critical section and never holds the lock across I/O.

use std::num::IntErrorKind;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tiny_shop_core::{CartItem, Order, ProductId};
use tracing::instrument;

use crate::catalog::Catalog;

/// Quantity used when the caller supplies none, or something that is not a number.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Errors from cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The requested quantity is below 1 or too large.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Checkout was attempted without a payment type or address.
    #[error("Payment type and address are required")]
    MissingCheckoutDetails,

    /// The cart lock was poisoned by a panicking request.
    #[error("Cart is unavailable")]
    Unavailable,
}

/// Parse the raw `quantity` query parameter.
///
/// Absent, blank or non-numeric input falls back to [`DEFAULT_QUANTITY`].
/// Numbers below 1 or beyond `u32` are rejected.
///
/// # Errors
///
/// Returns `CartError::InvalidQuantity` for out-of-range numbers.
pub fn parse_quantity(raw: Option<&str>) -> Result<u32, CartError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_QUANTITY);
    };

    match raw.parse::<i64>() {
        Ok(value) if value < 1 => Err(CartError::InvalidQuantity(raw.to_string())),
        Ok(value) => u32::try_from(value).map_err(|_| CartError::InvalidQuantity(raw.to_string())),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            Err(CartError::InvalidQuantity(raw.to_string()))
        }
        Err(e) if matches!(e.kind(), IntErrorKind::NegOverflow) => {
            Err(CartError::InvalidQuantity(raw.to_string()))
        }
        Err(_) => Ok(DEFAULT_QUANTITY),
    }
}

/// Parse the raw `id` query parameter.
///
/// An absent or non-integer ID can never name a catalog product, so it is
/// reported the same way as an unknown one.
///
/// # Errors
///
/// Returns `CartError::ProductNotFound` if the ID is absent or not an integer.
pub fn parse_product_id(raw: Option<&str>) -> Result<ProductId, CartError> {
    let raw = raw.unwrap_or_default();
    raw.parse::<ProductId>()
        .map_err(|_| CartError::ProductNotFound(raw.to_string()))
}

/// The shop's single cart, guarded by one lock.
#[derive(Debug)]
pub struct CartStore {
    catalog: Arc<Catalog>,
    items: Mutex<Vec<CartItem>>,
}

impl CartStore {
    /// Create an empty cart backed by `catalog`.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            items: Mutex::new(Vec::new()),
        }
    }

    /// Append `quantity` of the given product to the cart.
    ///
    /// The product is copied into the cart so later catalog reads do not
    /// affect it. Returns a copy of the appended item.
    ///
    /// # Errors
    ///
    /// - `CartError::ProductNotFound` if the product is not in the catalog
    /// - `CartError::InvalidQuantity` if `quantity` is zero
    /// - `CartError::Unavailable` if the lock is poisoned
    #[instrument(skip(self))]
    pub fn add(&self, product_id: ProductId, quantity: u32) -> Result<CartItem, CartError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CartError::ProductNotFound(product_id.to_string()))?;

        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity.to_string()));
        }

        self.push(CartItem::new(product.clone(), quantity))
    }

    /// Append an item described by raw `id` and `quantity` query values.
    ///
    /// The product is resolved before the quantity is looked at, so an
    /// unknown product is always reported as not found.
    ///
    /// # Errors
    ///
    /// - `CartError::ProductNotFound` if the ID is missing, malformed or unknown
    /// - `CartError::InvalidQuantity` per [`parse_quantity`]
    /// - `CartError::Unavailable` if the lock is poisoned
    #[instrument(skip(self))]
    pub fn add_raw(
        &self,
        raw_id: Option<&str>,
        raw_quantity: Option<&str>,
    ) -> Result<CartItem, CartError> {
        let product_id = parse_product_id(raw_id)?;
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| CartError::ProductNotFound(product_id.to_string()))?;
        let quantity = parse_quantity(raw_quantity)?;

        self.push(CartItem::new(product.clone(), quantity))
    }

    fn push(&self, item: CartItem) -> Result<CartItem, CartError> {
        self.items
            .lock()
            .map_err(|_| CartError::Unavailable)?
            .push(item.clone());

        Ok(item)
    }

    /// Turn the current cart into an order and empty the cart.
    ///
    /// Taking the items, totalling them and clearing the cart happen under one
    /// lock acquisition. An empty cart produces an order with a zero total.
    ///
    /// # Errors
    ///
    /// - `CartError::MissingCheckoutDetails` if either field is empty; the
    ///   cart is left untouched
    /// - `CartError::Unavailable` if the lock is poisoned
    #[instrument(skip(self))]
    pub fn checkout(&self, payment_type: &str, address: &str) -> Result<Order, CartError> {
        if payment_type.is_empty() || address.is_empty() {
            return Err(CartError::MissingCheckoutDetails);
        }

        let mut items = self.items.lock().map_err(|_| CartError::Unavailable)?;
        let order = Order::place(std::mem::take(&mut *items), payment_type, address);
        drop(items);

        Ok(order)
    }

    /// Number of items (lines, not units) currently in the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, CartError> {
        self.items
            .lock()
            .map(|items| items.len())
            .map_err(|_| CartError::Unavailable)
    }

    /// Whether the cart currently holds no items.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, CartError> {
        self.len().map(|len| len == 0)
    }

    /// A copy of the current items.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<CartItem>, CartError> {
        self.items
            .lock()
            .map(|items| items.clone())
            .map_err(|_| CartError::Unavailable)
    }
}
