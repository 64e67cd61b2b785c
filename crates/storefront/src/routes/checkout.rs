//! Checkout handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Checkout request body.
///
/// Only a JSON object is accepted. Missing or `null` fields read as empty
/// strings and are then rejected by the cart's own validation; fields of any
/// other type reject the whole body.
#[derive(Debug, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CheckoutRequest {
    pub payment_type: String,
    pub address: String,
}

impl TryFrom<Map<String, Value>> for CheckoutRequest {
    type Error = String;

    fn try_from(object: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            payment_type: string_field(&object, "payment_type")?,
            address: string_field(&object, "address")?,
        })
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> std::result::Result<String, String> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(format!("{key} must be a string, got {other}")),
    }
}

/// Checkout confirmation.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Turn the shared cart into an order.
///
/// The order is written to the order log after the cart lock is released.
///
/// # Errors
///
/// - 400 if the body is not a JSON object of the expected shape
/// - 400 if the payment type or address is empty
#[instrument(skip(state, body))]
pub async fn checkout(
    State(state): State<AppState>,
    body: std::result::Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected checkout body");
        AppError::BadRequest("Invalid request".to_string())
    })?;

    let order = state
        .cart()
        .checkout(&request.payment_type, &request.address)?;

    tracing::info!(
        items = order.items().len(),
        total = %order.total_amount(),
        payment_type = order.payment_type(),
        "Order placed"
    );
    state.order_log().record(&order);

    Ok(Json(CheckoutResponse {
        message: "Order placed successfully!".to_string(),
        total: order.total_amount(),
    }))
}
