use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use tonal_classifier::Verdict;
use tonal_core::models::record::round_confidence;
use tonal_core::models::submission::validate_text;

use crate::error::ApiError;
use crate::extract::SubmittedText;
use crate::render::{IndexView, SubmissionResult};
use crate::state::AppState;

pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.index(&IndexView::default())?))
}

/// Classify the submitted text, store the outcome, and show it under the form.
///
/// Only the first `text` field counts. A missing or empty one renders the
/// bare form.
pub async fn submit(
    State(state): State<AppState>,
    SubmittedText(text): SubmittedText,
) -> Result<Html<String>, ApiError> {
    let text = match validate_text(text) {
        Ok(text) => text,
        Err(reason) => {
            tracing::debug!(%reason, "submission skipped");
            return show_form(State(state)).await;
        }
    };

    let verdict = classify(&state, text.clone()).await?;
    let id = state
        .store
        .append(&text, verdict.sentiment, verdict.confidence)
        .await?;
    tracing::info!(
        id,
        sentiment = %verdict.sentiment,
        confidence = verdict.confidence,
        "submission stored"
    );

    let view = IndexView {
        result: Some(SubmissionResult {
            text,
            sentiment: verdict.sentiment,
            confidence: round_confidence(verdict.confidence),
        }),
    };
    Ok(Html(state.views.index(&view)?))
}

/// Run the injected classifier on the blocking pool and normalize its output.
async fn classify(state: &AppState, text: String) -> Result<Verdict, ApiError> {
    let classifier = Arc::clone(&state.classifier);
    let classification = tokio::task::spawn_blocking(move || classifier.classify(&text))
        .await
        .map_err(|e| ApiError::Internal(format!("classifier task failed: {e}")))??;

    Ok(Verdict::try_from(classification)?)
}
