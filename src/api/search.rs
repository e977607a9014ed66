//! Search API endpoint.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult, ValidQuery};
use crate::models::Entry;
use crate::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Text to look for in titles and contents. Empty matches everything.
    #[serde(default)]
    pub q: String,
}

/// Search results with the normalized query.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Entry>,
    pub total: usize,
}

/// GET /api/search - Case-insensitive substring search over title and content.
pub async fn search_entries(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SearchQuery>,
) -> ApiResult<SearchResponse> {
    let query = params.q.to_lowercase();
    let results = state.store.lock().await.search_entries(&query);
    let total = results.len();

    success(SearchResponse {
        query,
        results,
        total,
    })
}
