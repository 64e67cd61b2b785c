//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. Route handlers return `Result<T, AppError>`
//! and every error is rendered as a JSON body of the form `{"error": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::cart::CartError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ProductNotFound(_) => Self::NotFound("Product not found".to_string()),
            CartError::InvalidQuantity(raw) => {
                Self::BadRequest(format!("Quantity must be a positive integer (got {raw})"))
            }
            CartError::MissingCheckoutDetails => Self::BadRequest(err.to_string()),
            CartError::Unavailable => Self::Internal(err.to_string()),
        }
    }
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product not found".to_string());
        assert_eq!(err.to_string(), "Product not found");

        let err = AppError::Internal("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Internal error: lock poisoned");
    }

    #[test]
    fn test_cart_errors_map_to_statuses() {
        assert_eq!(
            AppError::from(CartError::ProductNotFound("9".to_string())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(CartError::InvalidQuantity("0".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(CartError::MissingCheckoutDetails).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(CartError::Unavailable).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = AppError::from(CartError::ProductNotFound("9".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Product not found" })
        );
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = AppError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal server error" })
        );
    }
}
