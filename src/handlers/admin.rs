// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::teacher::CreateTeacherRequest,
    policy::Actor,
    services::accounts,
};

/// Lists all teacher accounts (id and email).
/// Admin only.
pub async fn list_teachers(
    State(pool): State<SqlitePool>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse, AppError> {
    let teachers = accounts::list_teachers(&pool, &actor).await?;
    Ok(Json(teachers))
}

/// Creates a teacher account.
/// Admin only.
pub async fn create_teacher(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<CreateTeacherRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let account =
        accounts::create_teacher(&pool, &config, &actor, &payload.email, &payload.password).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Deletes a teacher account by ID.
/// Admin only. Prevents deleting self.
pub async fn delete_teacher(
    State(pool): State<SqlitePool>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    accounts::delete_teacher(&pool, &actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
