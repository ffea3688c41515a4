// src/repositories/quiz.rs

use sqlx::{SqlitePool, types::Json};

use crate::{
    config::MAX_CODE_ATTEMPTS,
    error::{AppError, is_unique_violation},
    models::quiz::{NewQuiz, Quiz},
    utils::code::generate_quiz_code,
};

/// Quiz repository: persistence of quiz definitions and their join codes.
pub struct QuizRepository;

impl QuizRepository {
    /// Stores a quiz under a freshly generated code.
    pub async fn create(
        pool: &SqlitePool,
        new_quiz: &NewQuiz,
        owner_email: &str,
    ) -> Result<Quiz, AppError> {
        Self::create_with(pool, new_quiz, owner_email, generate_quiz_code).await
    }

    /// Stores a quiz, drawing codes from `next_code`.
    ///
    /// Uniqueness is left to the UNIQUE constraint on `code`; a collision
    /// draws a new code, and after `MAX_CODE_ATTEMPTS` collisions the caller
    /// gets a retryable `Conflict`.
    pub async fn create_with<F>(
        pool: &SqlitePool,
        new_quiz: &NewQuiz,
        owner_email: &str,
        mut next_code: F,
    ) -> Result<Quiz, AppError>
    where
        F: FnMut() -> String,
    {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = next_code();

            match Self::insert(pool, &code, new_quiz, owner_email).await {
                Ok(quiz) => return Ok(quiz),
                Err(e) if is_unique_violation(&e) => {
                    tracing::warn!(
                        "Quiz code collision on '{}' (attempt {}/{})",
                        code,
                        attempt,
                        MAX_CODE_ATTEMPTS
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to create quiz: {:?}", e);
                    return Err(AppError::from(e));
                }
            }
        }

        Err(AppError::Conflict(
            "Could not allocate a unique quiz code, please retry".to_string(),
        ))
    }

    async fn insert(
        pool: &SqlitePool,
        code: &str,
        new_quiz: &NewQuiz,
        owner_email: &str,
    ) -> Result<Quiz, sqlx::Error> {
        sqlx::query_as::<_, Quiz>(
            r#"
            INSERT INTO quizzes
            (code, title, question_count, option_count, correct_answers, created_by, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, code, title, question_count, option_count, correct_answers, created_by, created_at
            "#,
        )
        .bind(code)
        .bind(&new_quiz.title)
        .bind(new_quiz.question_count)
        .bind(new_quiz.option_count)
        .bind(Json(&new_quiz.correct_answers))
        .bind(owner_email)
        .bind(chrono::Utc::now())
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_code(pool: &SqlitePool, code: &str) -> Result<Option<Quiz>, AppError> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, code, title, question_count, option_count, correct_answers, created_by, created_at
            FROM quizzes
            WHERE code = ? AND deleted_at IS NULL
            "#,
        )
        .bind(code)
        .fetch_optional(pool)
        .await?;

        Ok(quiz)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Quiz>, AppError> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, code, title, question_count, option_count, correct_answers, created_by, created_at
            FROM quizzes
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(quiz)
    }

    pub async fn list_for_owner(pool: &SqlitePool, email: &str) -> Result<Vec<Quiz>, AppError> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, code, title, question_count, option_count, correct_answers, created_by, created_at
            FROM quizzes
            WHERE created_by = ? AND deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .bind(email)
        .fetch_all(pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Quiz>, AppError> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, code, title, question_count, option_count, correct_answers, created_by, created_at
            FROM quizzes
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(quizzes)
    }

    /// Marks the quiz deleted. Its code stops resolving and it leaves every
    /// listing, but the row and its submissions stay in storage.
    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE quizzes SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
                .bind(chrono::Utc::now())
                .bind(id)
                .execute(pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete quiz: {:?}", e);
                    AppError::from(e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        Ok(())
    }
}
