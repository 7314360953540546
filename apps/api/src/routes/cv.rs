//! Axum route handlers for the document API: the current draft, the saved
//! collection, and the builder step index.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::cv::{CvDocument, CvPatch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetStepRequest {
    pub step: usize,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: usize,
}

/// GET /api/v1/cv
///
/// Snapshot of the current document. No side effects.
pub async fn handle_get_cv(State(state): State<AppState>) -> Json<CvDocument> {
    Json(state.store.get())
}

/// PATCH /api/v1/cv
///
/// Shallow-merge update: each provided top-level field wholly replaces the
/// current one (list fields included). Returns the merged document. The
/// write to storage is fire-and-forget; this response reflects the
/// in-memory state, which always wins.
pub async fn handle_update_cv(
    State(state): State<AppState>,
    Json(patch): Json<CvPatch>,
) -> Json<CvDocument> {
    state.store.update(patch);
    Json(state.store.get())
}

/// POST /api/v1/cv/reset
///
/// Replaces the current document with a fresh empty one (new identifier)
/// and resets the builder step index.
pub async fn handle_reset_cv(State(state): State<AppState>) -> Json<CvDocument> {
    Json(state.store.reset())
}

/// PUT /api/v1/cv/step
pub async fn handle_set_step(
    State(state): State<AppState>,
    Json(request): Json<SetStepRequest>,
) -> Json<StepResponse> {
    state.store.set_current_step(request.step);
    Json(StepResponse {
        step: state.store.current_step(),
    })
}

/// GET /api/v1/cv/saved
///
/// The saved collection, insertion order preserved. Because every update
/// autosaves, the active draft appears here too.
pub async fn handle_list_saved(State(state): State<AppState>) -> Json<Vec<CvDocument>> {
    Json(state.storage.list_saved().await)
}

/// DELETE /api/v1/cv/saved/:id
///
/// Removes one entry from the library. Deleting an unknown id is a no-op;
/// deleting the id of the document currently being edited leaves the
/// current draft untouched.
pub async fn handle_delete_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    state.storage.delete_saved(&id).await;
    StatusCode::NO_CONTENT
}

/// POST /api/v1/cv/saved/:id/load
///
/// Loads a saved document into the current slot for editing.
pub async fn handle_load_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CvDocument>, AppError> {
    let doc = state
        .storage
        .list_saved()
        .await
        .into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| AppError::NotFound(format!("No saved CV with id {id}")))?;

    state.store.replace(doc);
    Ok(Json(state.store.get()))
}
