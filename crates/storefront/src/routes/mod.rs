//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Catalog
//! GET  /search?q=&category=    - Search products by name prefix and category
//!
//! # Cart
//! POST /add?id=&quantity=      - Add a product to the shared cart
//! POST /checkout               - Place an order from the cart (JSON body)
//! ```

pub mod cart;
pub mod checkout;
pub mod search;

use axum::{
    Router,
    http::Request,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the shop routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route("/add", post(cart::add))
        .route("/checkout", post(checkout::checkout))
}

/// Build the complete application router with health check and middleware.
///
/// Sentry layers are added by the binary, outside of this router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .with_state(state)
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
