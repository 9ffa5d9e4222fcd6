use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::study_form::StudyForm;

#[derive(Debug, Serialize)]
pub struct SummarizeAndNotesResponse {
    pub success: bool,
    pub summary: String,
    pub notes: String,
    pub chapter: String,
    pub summary_word_count: usize,
}

#[tracing::instrument(skip(state, form))]
pub async fn summarize_and_notes_handler<F, L>(
    State(state): State<AppState<F, L>>,
    form: Result<StudyForm, ApiError>,
) -> Result<Json<SummarizeAndNotesResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let service = &state.study_service;
    service.ensure_configured()?;
    let form = form?;

    let word_count = form.target_word_count(service.config().default_word_count)?;
    let chapter = form.chapter();
    let input = form.into_input()?;

    tracing::info!(source = %input.source_name(), chapter = %chapter, word_count = word_count.get(), "Summarize and notes request");

    let text = service.resolve_text(input).await?;
    let pack = service
        .summarize_and_notes(&text, &chapter, word_count)
        .await?;

    Ok(Json(SummarizeAndNotesResponse {
        success: true,
        summary: pack.summary.text,
        notes: pack.notes.text,
        chapter: chapter.label().to_string(),
        summary_word_count: pack.summary.word_count,
    }))
}
