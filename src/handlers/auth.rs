// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::teacher::{CreateTeacherRequest, LoginRequest, Role},
    services::accounts,
    utils::jwt::sign_jwt,
};

/// Teacher sign-up.
///
/// Returns 201 Created with the account and a token, so the new teacher is
/// signed in straight away.
pub async fn register(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(payload): Json<CreateTeacherRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let account = accounts::register_teacher(&pool, &config, &payload.email, &payload.password).await?;
    let token = sign_jwt(&account, &config.jwt_secret, config.jwt_expiration)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "token": token,
            "type": "Bearer",
            "teacher": account,
        })),
    ))
}

/// Checks email and password and returns a JWT for the teacher.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::AuthError("Invalid email or password".to_string()));
    }

    let account = accounts::authenticate(&pool, &payload.email, &payload.password).await?;
    let token = sign_jwt(&account, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(json!({
        "token": token,
        "type": "Bearer",
        "email": account.email,
        "role": Role::for_email(&account.email, &config.admin_email),
    })))
}
