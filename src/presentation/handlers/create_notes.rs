use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::study_form::StudyForm;

#[derive(Debug, Serialize)]
pub struct CreateNotesResponse {
    pub success: bool,
    pub notes: String,
    pub chapter: String,
}

#[tracing::instrument(skip(state, form))]
pub async fn create_notes_handler<F, L>(
    State(state): State<AppState<F, L>>,
    form: Result<StudyForm, ApiError>,
) -> Result<Json<CreateNotesResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let service = &state.study_service;
    service.ensure_configured()?;
    let form = form?;

    let chapter = form.chapter();
    let input = form.into_input()?;

    tracing::info!(source = %input.source_name(), chapter = %chapter, "Create notes request");

    let text = service.resolve_text(input).await?;
    let notes = service.create_notes(&text, &chapter).await?;

    Ok(Json(CreateNotesResponse {
        success: true,
        notes: notes.text,
        chapter: chapter.label().to_string(),
    }))
}
