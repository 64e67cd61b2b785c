//! Completed orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::{CartItem, total_of};

/// An order built from a cart snapshot at checkout.
///
/// The total is computed once from `items` when the order is created and the
/// order is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    items: Vec<CartItem>,
    #[serde(with = "rust_decimal::serde::float")]
    total_amount: Decimal,
    payment_type: String,
    address: String,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Build an order from the given items, stamped with the current time.
    #[must_use]
    pub fn place(
        items: Vec<CartItem>,
        payment_type: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self::place_at(items, payment_type, address, Utc::now())
    }

    /// Build an order with an explicit timestamp.
    #[must_use]
    pub fn place_at(
        items: Vec<CartItem>,
        payment_type: impl Into<String>,
        address: impl Into<String>,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let total_amount = total_of(&items);
        Self {
            items,
            total_amount,
            payment_type: payment_type.into(),
            address: address.into(),
            placed_at,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    #[must_use]
    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}
