//! Axum route handlers for the Keywords API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::routes::ensure_text_size;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct KeywordResponse {
    pub keywords: Vec<String>,
}

/// POST /api/v1/keywords?top_n=N
///
/// Body is the plain text produced by the text-extraction step.
/// `top_n` falls back to `DEFAULT_TOP_N` when omitted.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    params: Result<Query<KeywordParams>, QueryRejection>,
    body: Bytes,
) -> Result<Json<KeywordResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let top_n = params.top_n.unwrap_or(state.config.default_top_n);

    ensure_text_size("body", &body, state.config.max_text_bytes)?;

    let keywords = state.keywords.extract_keywords_from_bytes(&body, top_n)?;

    Ok(Json(KeywordResponse { keywords }))
}
