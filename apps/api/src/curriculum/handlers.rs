//! Axum route handlers for the curriculum API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::curriculum::generator::generate_curriculum;
use crate::curriculum::params::ParameterSet;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateCurriculumRequest {
    #[serde(flatten)]
    pub params: ParameterSet,
    /// Session mode only — omit on the first call of a visit; the response
    /// carries the id to send on subsequent calls.
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct GenerateCurriculumResponse {
    pub curriculum_text: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

/// POST /api/v1/curricula/generate
///
/// Runs the full pipeline for one trigger: validate → build prompt →
/// one generation call → return text (plus prompt for display/debugging).
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateCurriculumRequest>,
) -> Result<Json<GenerateCurriculumResponse>, AppError> {
    let outcome = generate_curriculum(
        state.generator.as_ref(),
        &state.sessions,
        state.config.generation_mode,
        &request.params,
        request.session_id,
    )
    .await?;

    Ok(Json(GenerateCurriculumResponse {
        curriculum_text: outcome.curriculum_text,
        prompt: outcome.prompt,
        session_id: outcome.session_id,
    }))
}

/// DELETE /api/v1/sessions/:id
///
/// Explicit context reset for session mode. Clients call this when the user
/// switches to an unrelated topic.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.sessions.remove(session_id).await {
        return Err(AppError::NotFound(format!(
            "Session {session_id} not found"
        )));
    }
    Ok(Json(serde_json::json!({ "reset": true })))
}
