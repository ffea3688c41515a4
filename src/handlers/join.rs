// src/handlers/join.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{quiz::StudentQuizView, submission::SubmitAnswersRequest},
    services::quizzes,
};

/// Resolves a join code to the quiz a student group is about to take.
pub async fn resolve_quiz(
    State(pool): State<SqlitePool>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = quizzes::resolve_quiz_by_code(&pool, &code).await?;
    Ok(Json(StudentQuizView::from(quiz)))
}

/// Stores a group's picks, one per question in question order.
pub async fn submit_answers(
    State(pool): State<SqlitePool>,
    Path(code): Path<String>,
    Json(payload): Json<SubmitAnswersRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let submission =
        quizzes::submit_answers(&pool, &code, &payload.group_name, &payload.picks).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "submission_id": submission.id,
        })),
    ))
}
