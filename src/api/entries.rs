//! Entry API endpoints.

use axum::extract::State;
use serde::Deserialize;

use super::{success, ApiResult, ValidForm, ValidPath, ValidQuery};
use crate::errors::AppError;
use crate::models::{Entry, EntryForm};
use crate::AppState;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListEntriesQuery {
    /// Only entries carrying this tag (case-insensitive).
    #[serde(default)]
    pub tag: Option<String>,
    /// Keep only the newest N entries.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// GET /api/entries - List entries, newest first.
pub async fn list_entries(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListEntriesQuery>,
) -> ApiResult<Vec<Entry>> {
    let store = state.store.lock().await;
    success(store.get_entries(params.tag.as_deref(), params.limit))
}

/// GET /api/entries/:id - Get a single entry.
pub async fn get_entry(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<u64>,
) -> ApiResult<Entry> {
    let store = state.store.lock().await;

    match store.get_entry_by_id(id) {
        Some(entry) => success(entry.clone()),
        None => Err(AppError::NotFound("Entry not found".to_string())),
    }
}

/// POST /api/entries - Create a new entry.
pub async fn create_entry(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<EntryForm>,
) -> ApiResult<Entry> {
    let mut store = state.store.lock().await;
    let id = store.add_entry(form.into_new_entry())?;

    match store.get_entry_by_id(id) {
        Some(entry) => success(entry.clone()),
        None => Err(AppError::Internal(format!(
            "Entry {} missing after insert",
            id
        ))),
    }
}

/// PUT /api/entries/:id - Replace title, content, tags and privacy flag.
pub async fn update_entry(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<u64>,
    ValidForm(form): ValidForm<EntryForm>,
) -> ApiResult<Entry> {
    let mut store = state.store.lock().await;
    let entry = store.update_entry(id, form.into_changes())?;
    success(entry.clone())
}

/// DELETE /api/entries/:id - Delete an entry.
pub async fn delete_entry(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<u64>,
) -> ApiResult<()> {
    state.store.lock().await.delete_entry(id)?;
    success(())
}
