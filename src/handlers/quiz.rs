// src/handlers/quiz.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    error::AppError,
    models::quiz::CreateQuizRequest,
    policy::Actor,
    services::quizzes,
};

/// Dashboard: the caller's quizzes, or every quiz for the administrator.
pub async fn list_quizzes(
    State(pool): State<SqlitePool>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse, AppError> {
    let quizzes = quizzes::list_quizzes(&pool, &actor).await?;
    Ok(Json(quizzes))
}

/// Creates a quiz owned by the caller and returns it with its join code.
pub async fn create_quiz(
    State(pool): State<SqlitePool>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_quiz = payload.into_new_quiz()?;
    let quiz = quizzes::create_quiz(&pool, &actor, new_quiz).await?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Join code and student link, for projecting or turning into a QR code.
pub async fn join_info(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let info = quizzes::join_info(&pool, &config, &actor, id).await?;
    Ok(Json(info))
}

/// Per-group correctness report.
pub async fn get_results(
    State(pool): State<SqlitePool>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let report = quizzes::get_results(&pool, &actor, id).await?;
    Ok(Json(report))
}

/// Deletes a quiz. Owner or administrator only.
pub async fn delete_quiz(
    State(pool): State<SqlitePool>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    quizzes::delete_quiz(&pool, &actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
