// src/services/accounts.rs

use sqlx::SqlitePool;

use crate::{
    config::Config,
    error::AppError,
    models::teacher::{Role, TeacherAccount, TeacherSummary},
    policy::{self, Actor},
    repositories::TeacherRepository,
    utils::hash::{hash_password, verify_password},
};

/// Seeds the administrator account when the identity store is empty.
/// Returns whether the account was created.
pub async fn seed_admin(pool: &SqlitePool, config: &Config) -> Result<bool, AppError> {
    if TeacherRepository::count(pool).await? > 0 {
        return Ok(false);
    }

    let hashed_password = hash_password(&config.admin_password)?;
    let seeded = TeacherRepository::seed_if_empty(pool, &config.admin_email, &hashed_password).await?;

    if seeded {
        tracing::info!("Seeded administrator account: {}", config.admin_email);
    }

    Ok(seeded)
}

/// Returns the account when email and password both match exactly.
pub async fn verify_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<TeacherAccount>, AppError> {
    let account = TeacherRepository::find_by_email(pool, email).await?;

    Ok(account.filter(|account| verify_password(password, &account.password)))
}

pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<TeacherAccount, AppError> {
    verify_credentials(pool, email, password)
        .await?
        .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))
}

/// Creates a teacher account (public sign-up).
pub async fn register_teacher(
    pool: &SqlitePool,
    config: &Config,
    email: &str,
    password: &str,
) -> Result<TeacherAccount, AppError> {
    if TeacherRepository::find_by_email(pool, email).await?.is_some() {
        return Err(AppError::DuplicateEmail(format!(
            "Email '{}' is already registered",
            email
        )));
    }

    let hashed_password = hash_password(password)?;
    let account = TeacherRepository::create(pool, email, &hashed_password).await?;

    tracing::info!(
        "Registered teacher {} ({})",
        account.email,
        Role::for_email(&account.email, &config.admin_email)
    );
    Ok(account)
}

/// Creates a teacher account on behalf of the administrator.
pub async fn create_teacher(
    pool: &SqlitePool,
    config: &Config,
    actor: &Actor,
    email: &str,
    password: &str,
) -> Result<TeacherAccount, AppError> {
    require_admin(actor)?;
    register_teacher(pool, config, email, password).await
}

pub async fn list_teachers(pool: &SqlitePool, actor: &Actor) -> Result<Vec<TeacherSummary>, AppError> {
    require_admin(actor)?;
    TeacherRepository::list_all(pool).await
}

/// Removes a teacher account. The administrator cannot remove their own account.
pub async fn delete_teacher(pool: &SqlitePool, actor: &Actor, id: i64) -> Result<(), AppError> {
    require_admin(actor)?;

    if id == actor.id {
        return Err(AppError::BadRequest("Cannot delete yourself".to_string()));
    }

    TeacherRepository::delete_by_id(pool, id).await?;
    tracing::info!("Teacher {} deleted by {}", id, actor.email);
    Ok(())
}

fn require_admin(actor: &Actor) -> Result<(), AppError> {
    if policy::is_admin(actor) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(
            "Administrator access required".to_string(),
        ))
    }
}
