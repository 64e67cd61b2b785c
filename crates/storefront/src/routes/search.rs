//! Product search handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tiny_shop_core::Product;
use tracing::instrument;

use crate::state::AppState;

/// Search query parameters. Both filters are optional.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-sensitive name prefix
    #[serde(default)]
    pub q: Option<String>,
    /// Exact category
    #[serde(default)]
    pub category: Option<String>,
}

/// Search the catalog.
///
/// Always answers with a JSON array, empty when nothing matches.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    let results = state
        .catalog()
        .search(query.q.as_deref(), query.category.as_deref());
    tracing::debug!(matches = results.len(), "Catalog search");
    Json(results)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{TestApp, get};

    #[tokio::test]
    async fn test_search_without_filters_returns_everything() {
        let app = TestApp::new();

        let (status, body) = app.send(get("/search")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "name": "Laptop", "category": "Electronics", "price": 1000.0},
                {"id": 2, "name": "Phone", "category": "Electronics", "price": 500.0},
                {"id": 3, "name": "Shoes", "category": "Fashion", "price": 50.0}
            ])
        );
    }

    #[tokio::test]
    async fn test_search_by_prefix_and_category() {
        let app = TestApp::new();

        let (_, body) = app.send(get("/search?q=Lap")).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Laptop");

        let (_, body) = app.send(get("/search?category=Fashion")).await;
        assert_eq!(body[0]["name"], "Shoes");

        let (_, body) = app.send(get("/search?q=&category=")).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_with_no_matches_returns_empty_array() {
        let app = TestApp::new();

        let (status, body) = app.send(get("/search?q=Toaster")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
