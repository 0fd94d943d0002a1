use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use super::{CheckResponse, HealthResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::quiz::{self, QuizQuestion};

pub async fn random_word(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuizQuestion>, AppError> {
    let question = state.quiz.random_question().await?;
    Ok(Json(question))
}

pub async fn check_answer(
    path: Result<Path<(String, String, String)>, PathRejection>,
) -> Result<Json<CheckResponse>, AppError> {
    // Undecodable segments (e.g. invalid UTF-8) still get the JSON error body.
    let Path((word_id, choice_index, correct_index)) =
        path.map_err(|rejection| AppError::InvalidArgument(rejection.body_text()))?;

    if word_id.trim().is_empty() {
        return Err(AppError::InvalidArgument("word_id cannot be empty".into()));
    }

    let choice_index = quiz::parse_index("choice_index", &choice_index)?;
    let correct_index = quiz::parse_index("correct_index", &correct_index)?;

    let correct = quiz::check_answer(&word_id, choice_index, correct_index);

    Ok(Json(CheckResponse {
        correct,
        correct_index,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
