// src/services/quizzes.rs

use sqlx::SqlitePool;
use url::Url;

use crate::{
    config::{Config, MAX_GROUP_NAME_CHARS, MAX_TITLE_CHARS},
    error::AppError,
    models::{
        quiz::{JoinInfo, NewQuiz, Quiz},
        submission::Submission,
    },
    policy::{self, Actor},
    repositories::{QuizRepository, SubmissionRepository},
    scoring::{self, QuizReport},
};

/// Creates a quiz owned by the actor. The answer key must fit the quiz shape.
pub async fn create_quiz(
    pool: &SqlitePool,
    actor: &Actor,
    mut new_quiz: NewQuiz,
) -> Result<Quiz, AppError> {
    new_quiz.validate_shape()?;

    new_quiz.title = new_quiz.title.trim().to_string();
    if new_quiz.title.is_empty() {
        return Err(AppError::BadRequest("Title cannot be empty".to_string()));
    }
    if new_quiz.title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Title must be at most {} characters",
            MAX_TITLE_CHARS
        )));
    }

    let quiz = QuizRepository::create(pool, &new_quiz, &actor.email).await?;
    tracing::info!("Quiz {} ({}) created by {}", quiz.id, quiz.code, actor.email);
    Ok(quiz)
}

/// Dashboard listing: everything for the administrator, own quizzes otherwise.
pub async fn list_quizzes(pool: &SqlitePool, actor: &Actor) -> Result<Vec<Quiz>, AppError> {
    if policy::is_admin(actor) {
        QuizRepository::list_all(pool).await
    } else {
        QuizRepository::list_for_owner(pool, &actor.email).await
    }
}

/// Student entry point. Reads only.
pub async fn resolve_quiz_by_code(pool: &SqlitePool, code: &str) -> Result<Quiz, AppError> {
    QuizRepository::find_by_code(pool, code.trim())
        .await?
        .ok_or_else(|| AppError::NotFound("Invalid code".to_string()))
}

/// Loads a quiz the actor is allowed to see.
async fn load_accessible(pool: &SqlitePool, actor: &Actor, quiz_id: i64) -> Result<Quiz, AppError> {
    let quiz = QuizRepository::find_by_id(pool, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

    if !policy::can_access_quiz(actor, &quiz) {
        return Err(AppError::PermissionDenied(
            "You are not allowed to access this quiz".to_string(),
        ));
    }

    Ok(quiz)
}

/// The code and student link a teacher shows to the class.
pub async fn join_info(
    pool: &SqlitePool,
    config: &Config,
    actor: &Actor,
    quiz_id: i64,
) -> Result<JoinInfo, AppError> {
    let quiz = load_accessible(pool, actor, quiz_id).await?;

    let mut join_url = Url::parse(&config.public_base_url)
        .map_err(|e| AppError::StorageFailure(format!("Invalid PUBLIC_BASE_URL: {}", e)))?;
    join_url.query_pairs_mut().clear().append_pair("code", &quiz.code);

    Ok(JoinInfo {
        quiz_id: quiz.id,
        title: quiz.title,
        code: quiz.code,
        join_url: join_url.to_string(),
    })
}

/// Removes the quiz from listings and from code lookup. Submissions are kept.
pub async fn delete_quiz(pool: &SqlitePool, actor: &Actor, quiz_id: i64) -> Result<(), AppError> {
    let quiz = load_accessible(pool, actor, quiz_id).await?;

    QuizRepository::delete_by_id(pool, quiz.id).await?;
    tracing::info!("Quiz {} ({}) deleted by {}", quiz.id, quiz.code, actor.email);
    Ok(())
}

/// Records a submission against a quiz addressed by id.
/// The group name is stored as typed, minus surrounding whitespace.
pub async fn record_submission(
    pool: &SqlitePool,
    quiz_id: i64,
    group_name: &str,
    picks: &[u32],
) -> Result<Submission, AppError> {
    let group_name = group_name.trim();
    if group_name.is_empty() {
        return Err(AppError::BadRequest("Group name is required".to_string()));
    }
    if group_name.chars().count() > MAX_GROUP_NAME_CHARS {
        return Err(AppError::BadRequest(format!(
            "Group name must be at most {} characters",
            MAX_GROUP_NAME_CHARS
        )));
    }

    SubmissionRepository::record(pool, quiz_id, group_name, picks).await
}

/// Records a group's picks for the quiz behind a join code.
pub async fn submit_answers(
    pool: &SqlitePool,
    code: &str,
    group_name: &str,
    picks: &[u32],
) -> Result<Submission, AppError> {
    let quiz = QuizRepository::find_by_code(pool, code.trim())
        .await?
        .ok_or_else(|| AppError::UnknownQuiz("Invalid quiz code".to_string()))?;

    let submission = record_submission(pool, quiz.id, group_name, picks).await?;
    tracing::info!(
        "Group '{}' submitted to quiz {} ({})",
        submission.group_name,
        quiz.id,
        quiz.code
    );
    Ok(submission)
}

pub async fn get_results(
    pool: &SqlitePool,
    actor: &Actor,
    quiz_id: i64,
) -> Result<QuizReport, AppError> {
    let quiz = load_accessible(pool, actor, quiz_id).await?;
    let submissions = SubmissionRepository::list_for_quiz(pool, quiz.id).await?;

    Ok(scoring::build_report(&quiz, &submissions))
}
