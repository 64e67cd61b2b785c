//! Integration tests for Tiny Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tiny-shop-integration-tests
//! ```
//!
//! Each test boots the storefront router on an ephemeral local port with an
//! in-memory order log and talks to it over real HTTP.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::Arc;

use tiny_shop_storefront::catalog::Catalog;
use tiny_shop_storefront::order_log::{MemorySink, OrderLog};
use tiny_shop_storefront::routes;
use tiny_shop_storefront::state::AppState;
use tokio::net::TcpListener;

/// A storefront served on `127.0.0.1` for the lifetime of the test.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub state: AppState,
    pub log: Arc<MemorySink>,
}

impl TestServer {
    /// Start a server over the seed catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        Self::start_with(Catalog::seeded()).await
    }

    /// Start a server over the given catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    #[allow(clippy::expect_used)]
    pub async fn start_with(catalog: Catalog) -> Self {
        let log = Arc::new(MemorySink::new());
        let state = AppState::new(catalog, OrderLog::new(log.clone()));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let app = routes::app(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            state,
            log,
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
