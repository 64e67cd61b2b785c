//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// A product and the quantity requested, copied into the cart at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Create a new cart item.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Sum of line totals over `items`. Zero for an empty slice.
#[must_use]
pub fn total_of(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}
