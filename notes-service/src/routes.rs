//! Axum route handlers for the notes REST API.

use crate::error::{NOTE_NOT_FOUND, NotesError};
use crate::store::NoteStore;
use crate::summary::SummaryGateway;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use notes_types::*;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<NoteStore>,
    pub summaries: SummaryGateway,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/summary",
            post(summarize_note).delete(delete_note_named_summary),
        )
        .route("/api/notes/:id", delete(delete_note))
        .with_state(state)
}

// GET /
async fn root() -> &'static str {
    "server is up"
}

// GET /api/notes
async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<Note>> {
    Json(state.store.list())
}

// POST /api/notes
async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNoteRequest>,
) -> (StatusCode, Json<Note>) {
    let note = state.store.create(req.text);
    (StatusCode::CREATED, Json(note))
}

// DELETE /api/notes/:id
async fn delete_note(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    delete_by_id(&state, &id)
}

// DELETE /api/notes/summary
// The static summary path shadows `:id`, so this id needs its own handler.
async fn delete_note_named_summary(State(state): State<Arc<AppState>>) -> Response {
    delete_by_id(&state, "summary")
}

fn delete_by_id(state: &AppState, id: &str) -> Response {
    match state.store.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(NotesError::NotFound) => {
            log::warn!("[NOTES] Delete of unknown note {}", id);
            (StatusCode::NOT_FOUND, Json(DetailBody::new(NOTE_NOT_FOUND))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

// POST /api/notes/summary
async fn summarize_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, NotesError> {
    let summary = state
        .summaries
        .summarize(
            req.notes_id.as_deref(),
            req.user_query.as_deref(),
            req.model_name.as_deref(),
        )
        .await?;

    Ok(Json(SummaryResponse { summary }))
}
