// src/repositories/submission.rs

use sqlx::{SqlitePool, types::Json};

use crate::{
    error::{AppError, is_foreign_key_violation},
    models::submission::Submission,
    repositories::QuizRepository,
};

/// Submission store: one row per group hand-in.
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Records a group's picks for a quiz.
    ///
    /// Quizzes are never edited, so the shape check needs no lock. The insert is
    /// a single statement; a quiz removed in between still fails on the foreign key.
    pub async fn record(
        pool: &SqlitePool,
        quiz_id: i64,
        group_name: &str,
        picks: &[u32],
    ) -> Result<Submission, AppError> {
        let quiz = QuizRepository::find_by_id(pool, quiz_id)
            .await?
            .ok_or_else(|| AppError::UnknownQuiz(format!("No quiz with id {}", quiz_id)))?;

        quiz.validate_picks(picks)?;

        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (quiz_id, group_name, picks, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, quiz_id, group_name, picks, created_at
            "#,
        )
        .bind(quiz.id)
        .bind(group_name)
        .bind(Json(picks))
        .bind(chrono::Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::UnknownQuiz(format!("No quiz with id {}", quiz_id))
            } else {
                tracing::error!("Failed to record submission: {:?}", e);
                AppError::from(e)
            }
        })?;

        Ok(submission)
    }

    /// All submissions of a quiz, first submitted first.
    pub async fn list_for_quiz(pool: &SqlitePool, quiz_id: i64) -> Result<Vec<Submission>, AppError> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, quiz_id, group_name, picks, created_at
            FROM submissions
            WHERE quiz_id = ?
            ORDER BY id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }
}
