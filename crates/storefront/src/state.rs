//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::order_log::OrderLog;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the cart and the order log.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Arc<Catalog>,
    cart: CartStore,
    order_log: OrderLog,
}

impl AppState {
    /// Create a new application state with an empty cart.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Products available for search and purchase
    /// * `order_log` - Destination for completed orders
    #[must_use]
    pub fn new(catalog: Catalog, order_log: OrderLog) -> Self {
        let catalog = Arc::new(catalog);
        let cart = CartStore::new(Arc::clone(&catalog));

        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                cart,
                order_log,
            }),
        }
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the shared cart.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the order log.
    #[must_use]
    pub fn order_log(&self) -> &OrderLog {
        &self.inner.order_log
    }
}
