// src/models/quiz.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::AppError;

static CSV_ANSWER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*(,\s*\d+\s*)*$").expect("answer key pattern is valid"));

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Quiz {
    pub id: i64,

    /// Short public join code. Unique and never changed after creation.
    pub code: String,

    pub title: String,

    pub question_count: u32,

    pub option_count: u32,

    /// Zero-based option index of the correct answer, one per question.
    /// Stored as a JSON array in the database.
    #[sqlx(json)]
    pub correct_answers: Vec<u32>,

    /// Email of the owning teacher.
    pub created_by: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Quiz {
    /// Checks a group's picks against the quiz shape: one pick per question,
    /// every pick a valid option index.
    pub fn validate_picks(&self, picks: &[u32]) -> Result<(), AppError> {
        if picks.len() != self.question_count as usize {
            return Err(AppError::InvalidShape(format!(
                "Expected {} picks, got {}",
                self.question_count,
                picks.len()
            )));
        }

        if let Some((question, pick)) = picks
            .iter()
            .enumerate()
            .find(|(_, pick)| **pick >= self.option_count)
        {
            return Err(AppError::InvalidShape(format!(
                "Pick {} for question {} is outside 0..{}",
                pick, question, self.option_count
            )));
        }

        Ok(())
    }
}

/// Validated input for creating a quiz. The owner is supplied separately.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub title: String,
    pub question_count: u32,
    pub option_count: u32,
    pub correct_answers: Vec<u32>,
}

impl NewQuiz {
    /// The answer key must have one entry per question, each a valid option.
    pub fn validate_shape(&self) -> Result<(), AppError> {
        if self.question_count == 0 || self.option_count == 0 {
            return Err(AppError::InvalidShape(
                "Question and option counts must be positive".to_string(),
            ));
        }

        if self.correct_answers.len() != self.question_count as usize {
            return Err(AppError::InvalidShape(format!(
                "Answer key has {} entries but the quiz has {} questions",
                self.correct_answers.len(),
                self.question_count
            )));
        }

        if let Some(answer) = self
            .correct_answers
            .iter()
            .find(|answer| **answer >= self.option_count)
        {
            return Err(AppError::InvalidShape(format!(
                "Answer {} is outside 0..{}",
                answer, self.option_count
            )));
        }

        Ok(())
    }
}

/// Answer key as sent by clients: either `[0, 3, 1]` or `"0,3,1"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerKeyInput {
    List(Vec<u32>),
    Csv(String),
}

impl AnswerKeyInput {
    pub fn into_answers(self) -> Result<Vec<u32>, AppError> {
        match self {
            AnswerKeyInput::List(answers) => Ok(answers),
            AnswerKeyInput::Csv(raw) => {
                if !CSV_ANSWER_KEY.is_match(&raw) {
                    return Err(AppError::BadRequest(
                        "Answer key must be a comma-separated list of option indices".to_string(),
                    ));
                }

                raw.split(',')
                    .map(|part| {
                        part.trim().parse::<u32>().map_err(|_| {
                            AppError::BadRequest(format!("Invalid option index '{}'", part.trim()))
                        })
                    })
                    .collect()
            }
        }
    }
}

/// DTO for creating a new quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."))]
    pub title: String,
    #[validate(range(min = 1, max = 100, message = "Question count must be between 1 and 100."))]
    pub question_count: u32,
    #[validate(range(min = 1, max = 26, message = "Option count must be between 1 and 26."))]
    pub option_count: u32,
    pub correct_answers: AnswerKeyInput,
}

impl CreateQuizRequest {
    pub fn into_new_quiz(self) -> Result<NewQuiz, AppError> {
        self.validate()?;

        Ok(NewQuiz {
            title: self.title,
            question_count: self.question_count,
            option_count: self.option_count,
            correct_answers: self.correct_answers.into_answers()?,
        })
    }
}

/// What a student sees after entering a join code.
/// Carries the answer key so the client can give immediate feedback per pick.
#[derive(Debug, Serialize)]
pub struct StudentQuizView {
    pub code: String,
    pub title: String,
    pub question_count: u32,
    pub option_count: u32,
    pub correct_answers: Vec<u32>,
}

impl From<Quiz> for StudentQuizView {
    fn from(quiz: Quiz) -> Self {
        Self {
            code: quiz.code,
            title: quiz.title,
            question_count: quiz.question_count,
            option_count: quiz.option_count,
            correct_answers: quiz.correct_answers,
        }
    }
}

/// The join artifact a teacher projects for the class (code plus link).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinInfo {
    pub quiz_id: i64,
    pub title: String,
    pub code: String,
    pub join_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(question_count: u32, option_count: u32) -> Quiz {
        Quiz {
            id: 1,
            code: "abcd1234".to_string(),
            title: "T".to_string(),
            question_count,
            option_count,
            correct_answers: vec![0; question_count as usize],
            created_by: "t@example.com".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn csv_answer_key_is_parsed_in_order() {
        let key = AnswerKeyInput::Csv(" 0, 3,1 ".to_string());
        assert_eq!(key.into_answers().unwrap(), vec![0, 3, 1]);
    }

    #[test]
    fn malformed_csv_answer_key_is_rejected() {
        for raw in ["", "a,b", "1,,2", "1;2", "-1,2"] {
            let key = AnswerKeyInput::Csv(raw.to_string());
            assert!(
                matches!(key.into_answers(), Err(AppError::BadRequest(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn answer_key_accepts_json_list_or_string() {
        let list: AnswerKeyInput = serde_json::from_str("[2, 0]").unwrap();
        assert_eq!(list.into_answers().unwrap(), vec![2, 0]);

        let csv: AnswerKeyInput = serde_json::from_str("\"2,0\"").unwrap();
        assert_eq!(csv.into_answers().unwrap(), vec![2, 0]);
    }

    #[test]
    fn answer_key_length_must_match_question_count() {
        let new_quiz = NewQuiz {
            title: "T".to_string(),
            question_count: 3,
            option_count: 4,
            correct_answers: vec![0, 1],
        };
        assert!(matches!(new_quiz.validate_shape(), Err(AppError::InvalidShape(_))));
    }

    #[test]
    fn answer_key_entries_must_be_valid_options() {
        let new_quiz = NewQuiz {
            title: "T".to_string(),
            question_count: 2,
            option_count: 4,
            correct_answers: vec![0, 4],
        };
        assert!(matches!(new_quiz.validate_shape(), Err(AppError::InvalidShape(_))));
    }

    #[test]
    fn picks_must_cover_every_question() {
        let quiz = quiz(3, 4);
        assert!(quiz.validate_picks(&[0, 1, 2]).is_ok());
        assert!(matches!(quiz.validate_picks(&[0, 1]), Err(AppError::InvalidShape(_))));
        assert!(matches!(quiz.validate_picks(&[0, 1, 2, 3]), Err(AppError::InvalidShape(_))));
    }

    #[test]
    fn picks_outside_option_range_are_rejected() {
        let quiz = quiz(2, 4);
        assert!(matches!(quiz.validate_picks(&[0, 4]), Err(AppError::InvalidShape(_))));
    }

    #[test]
    fn create_request_rejects_zero_questions() {
        let request = CreateQuizRequest {
            title: "T".to_string(),
            question_count: 0,
            option_count: 4,
            correct_answers: AnswerKeyInput::List(vec![]),
        };
        assert!(matches!(request.into_new_quiz(), Err(AppError::BadRequest(_))));
    }
}
