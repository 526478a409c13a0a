//! Axum route handlers for the Matching API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::matching::skill_matcher::MatchResult;
use crate::routes::ensure_text_size;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub jd_text: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: BTreeMap<String, f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/match
///
/// Scores one resume text against one job description text.
/// Missing or non-string fields are rejected as invalid input.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    ensure_text_size("jd_text", &request.jd_text, state.config.max_text_bytes)?;
    ensure_text_size("resume_text", &request.resume_text, state.config.max_text_bytes)?;

    let result = state.scorer.score(&request.jd_text, &request.resume_text);

    Ok(Json(MatchResponse {
        result,
        backend: state.scorer.backend(),
    }))
}

/// GET /api/v1/skills
///
/// Returns the loaded skill catalog as `{term: weight}`.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.scorer.catalog().weights().clone(),
    })
}
