//! Read-only product catalog.
//!
//! The catalog is fixed at startup and shared immutably across handlers, so
//! lookups need no synchronization.

use rust_decimal::Decimal;
use tiny_shop_core::{Product, ProductId};

/// The fixed set of purchasable products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The store's seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(ProductId::new(1), "Laptop", "Electronics", Decimal::new(1000, 0)),
            Product::new(ProductId::new(2), "Phone", "Electronics", Decimal::new(500, 0)),
            Product::new(ProductId::new(3), "Shoes", "Fashion", Decimal::new(50, 0)),
        ])
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Filter the catalog by name prefix and category.
    ///
    /// An empty or absent filter matches everything. The name filter is a
    /// case-sensitive prefix match and the category filter is exact. Results
    /// keep catalog order.
    #[must_use]
    pub fn search(&self, query: Option<&str>, category: Option<&str>) -> Vec<Product> {
        let query = query.filter(|q| !q.is_empty());
        let category = category.filter(|c| !c.is_empty());

        self.products
            .iter()
            .filter(|product| query.is_none_or(|q| product.name_starts_with(q)))
            .filter(|product| category.is_none_or(|c| product.category == c))
            .cloned()
            .collect()
    }
}
