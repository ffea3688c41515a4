// src/models/submission.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'submissions' table in the database.
/// One group's complete set of picks for a quiz.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Submission {
    pub id: i64,
    pub quiz_id: i64,
    pub group_name: String,

    /// Picked option index per question, in question order.
    #[sqlx(json)]
    pub picks: Vec<u32>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for a student group handing in its picks.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(length(min = 1, max = 100, message = "Group name must be between 1 and 100 characters."))]
    pub group_name: String,
    pub picks: Vec<u32>,
}
