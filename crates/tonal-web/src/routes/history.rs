use axum::extract::State;
use axum::response::Html;

use crate::error::ApiError;
use crate::render::{HistoryEntry, HistoryView};
use crate::state::AppState;

pub async fn show_history(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let records = state.store.list_all().await?;
    tracing::debug!(count = records.len(), "history loaded");

    let results = records.into_iter().map(HistoryEntry::from).collect();
    Ok(Html(state.views.history(&HistoryView { results })?))
}
