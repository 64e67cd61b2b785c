//! Catalog products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A purchasable product.
///
/// Serialized as `{id, name, category, price}` with `price` as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit price, never negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// Create a new product.
    ///
    /// Negative prices are clamped to zero.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price: price.max(Decimal::ZERO),
        }
    }

    /// Whether the product's name starts with `prefix` (case-sensitive).
    #[must_use]
    pub fn name_starts_with(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }
}
