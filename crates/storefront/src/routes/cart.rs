//! Add-to-cart handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::order_log::addition_message;
use crate::state::AppState;

/// Add-to-cart query parameters.
///
/// Kept as raw strings so that the cart's own fallback rules apply instead of
/// a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AddToCartQuery {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// Confirmation returned after a successful add.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub message: String,
}

/// Add a product to the shared cart.
///
/// # Errors
///
/// - 404 if the product ID is missing, malformed or unknown, whatever the quantity
/// - 400 if the quantity of a known product is below 1
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Query(query): Query<AddToCartQuery>,
) -> Result<Json<AddToCartResponse>> {
    let item = state
        .cart()
        .add_raw(query.id.as_deref(), query.quantity.as_deref())?;
    let message = addition_message(&item);

    tracing::info!(
        product_id = %item.product.id,
        quantity = item.quantity,
        "{message}"
    );
    state.order_log().record_addition(&item);

    Ok(Json(AddToCartResponse { message }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{TestApp, post};

    #[tokio::test]
    async fn test_add_with_quantity() {
        let app = TestApp::new();

        let (status, body) = app.send(post("/add?id=1&quantity=2")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Added 2 of Laptop to the cart" }));
        assert_eq!(app.state.cart().len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_add_defaults_quantity_to_one() {
        let app = TestApp::new();

        let (_, body) = app.send(post("/add?id=3")).await;
        assert_eq!(body["message"], "Added 1 of Shoes to the cart");

        let (_, body) = app.send(post("/add?id=3&quantity=lots")).await;
        assert_eq!(body["message"], "Added 1 of Shoes to the cart");

        let quantities: Vec<u32> = app
            .state
            .cart()
            .snapshot()
            .unwrap()
            .iter()
            .map(|item| item.quantity)
            .collect();
        assert_eq!(quantities, [1, 1]);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let app = TestApp::new();

        for uri in ["/add?id=99", "/add?id=abc", "/add"] {
            let (status, body) = app.send(post(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "error": "Product not found" }));
        }
        assert!(app.state.cart().is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_add_unknown_product_with_bad_quantity_is_not_found() {
        let app = TestApp::new();

        for uri in ["/add?id=99&quantity=0", "/add?id=99&quantity=-3", "/add?quantity=0"] {
            let (status, body) = app.send(post(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "error": "Product not found" }));
        }
        assert!(app.state.cart().is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_add_rejects_non_positive_quantity() {
        let app = TestApp::new();

        let (status, body) = app.send(post("/add?id=1&quantity=0")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("positive integer"));
        assert!(app.state.cart().is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_add_is_recorded_in_order_log() {
        let app = TestApp::new();

        app.send(post("/add?id=2&quantity=4")).await;

        let records = app.log.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("Added 4 of Phone to the cart"));
    }

    #[tokio::test]
    async fn test_add_rejects_get() {
        let app = TestApp::new();

        let (status, _) = app.send(crate::routes::test_support::get("/add?id=1")).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
