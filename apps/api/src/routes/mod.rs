pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::keywords;
use crate::matching;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/resumes/match",
            post(matching::handlers::handle_match),
        )
        .route("/api/v1/skills", get(matching::handlers::handle_list_skills))
        // Keywords API
        .route(
            "/api/v1/keywords",
            post(keywords::handlers::handle_extract_keywords),
        )
        .fallback(not_found)
        .with_state(state)
}

/// Rejects request text larger than `max_bytes`.
pub(crate) fn ensure_text_size(
    field: &str,
    text: impl AsRef<[u8]>,
    max_bytes: usize,
) -> Result<(), AppError> {
    let len = text.as_ref().len();
    if len > max_bytes {
        return Err(AppError::InvalidInput(format!(
            "{field} is {len} bytes; the limit is {max_bytes}"
        )));
    }
    Ok(())
}
