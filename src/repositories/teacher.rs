// src/repositories/teacher.rs

use sqlx::SqlitePool;

use crate::{
    error::{AppError, is_unique_violation},
    models::teacher::{TeacherAccount, TeacherSummary},
};

/// Identity store: persistence of teacher accounts.
pub struct TeacherRepository;

impl TeacherRepository {
    /// Inserts a new account. Emails are compared exactly, so `A@x.org` and
    /// `a@x.org` are different accounts.
    pub async fn create(
        pool: &SqlitePool,
        email: &str,
        password_hash: &str,
    ) -> Result<TeacherAccount, AppError> {
        sqlx::query_as::<_, TeacherAccount>(
            r#"
            INSERT INTO teachers (email, password, created_at)
            VALUES (?, ?, ?)
            RETURNING id, email, password, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(chrono::Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateEmail(format!("Email '{}' is already registered", email))
            } else {
                tracing::error!("Failed to create teacher: {:?}", e);
                AppError::from(e)
            }
        })
    }

    /// Inserts the first account only when no account exists at all.
    /// Returns whether a row was written.
    pub async fn seed_if_empty(
        pool: &SqlitePool,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO teachers (email, password, created_at)
            SELECT ?, ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM teachers)
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<TeacherAccount>, AppError> {
        let account = sqlx::query_as::<_, TeacherAccount>(
            "SELECT id, email, password, created_at FROM teachers WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<TeacherAccount>, AppError> {
        let account = sqlx::query_as::<_, TeacherAccount>(
            "SELECT id, email, password, created_at FROM teachers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<TeacherSummary>, AppError> {
        let teachers =
            sqlx::query_as::<_, TeacherSummary>("SELECT id, email FROM teachers ORDER BY id")
                .fetch_all(pool)
                .await?;

        Ok(teachers)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete teacher: {:?}", e);
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Teacher not found".to_string()));
        }

        Ok(())
    }
}
