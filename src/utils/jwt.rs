// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::teacher::TeacherAccount,
    policy::{self, Actor},
    repositories::TeacherRepository,
    state::AppState,
};

/// JWT Claims structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Subject - the teacher ID (as string).
    pub sub: String,
    pub email: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

/// Signs a token for the teacher, valid for `expiration_seconds`.
pub fn sign_jwt(
    account: &TeacherAccount,
    secret: &str,
    expiration_seconds: u64,
) -> Result<String, AppError> {
    let expiration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::StorageFailure(e.to_string()))?
        .as_secs() as usize
        + expiration_seconds as usize;

    let claims = Claims {
        sub: account.id.to_string(),
        email: account.email.clone(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::StorageFailure(e.to_string()))
}

/// Verifies and decodes a JWT string.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Axum Middleware: Authentication.
///
/// Validates the 'Authorization: Bearer <token>' header, reloads the teacher
/// so deleted accounts lose access immediately, and injects the resulting
/// `Actor` into the request extensions. The role is decided here against the
/// configured admin email.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::AuthError("Missing bearer token".to_string()))?;

    let claims = verify_jwt(token, &state.config.jwt_secret)?;

    let id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

    let account = TeacherRepository::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::AuthError("Account no longer exists".to_string()))?;

    let actor = Actor::for_account(&account, &state.config.admin_email);
    req.extensions_mut().insert(actor);
    Ok(next.run(req).await)
}

/// Axum Middleware: Admin Authorization.
///
/// Must run AFTER `auth_middleware`.
pub async fn admin_middleware(req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let actor = req
        .extensions()
        .get::<Actor>()
        .ok_or_else(|| AppError::AuthError("Not authenticated".to_string()))?;

    if !policy::is_admin(actor) {
        return Err(AppError::PermissionDenied(
            "Administrator access required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
