// src/scoring.rs

//! Turns stored picks into the teacher's correctness report.

use serde::Serialize;

use crate::models::{quiz::Quiz, submission::Submission};

/// Correctness of one group's submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    pub submission_id: i64,
    pub group_name: String,
    pub picks: Vec<u32>,
    /// `correctness[i]` is true when the pick for question `i` matches the key.
    pub correctness: Vec<bool>,
    pub total_correct: usize,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Results of a quiz. Submissions keep storage order; no ranking is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizReport {
    pub quiz_id: i64,
    pub quiz_title: String,
    pub code: String,
    pub question_indices: Vec<usize>,
    pub correct_answers: Vec<u32>,
    pub submissions: Vec<SubmissionResult>,
}

/// Compares picks positionally: the pick at position `i` is scored against
/// the answer at position `i`. A missing pick counts as wrong.
pub fn score_picks(correct_answers: &[u32], picks: &[u32]) -> Vec<bool> {
    correct_answers
        .iter()
        .enumerate()
        .map(|(i, answer)| picks.get(i) == Some(answer))
        .collect()
}

pub fn build_report(quiz: &Quiz, submissions: &[Submission]) -> QuizReport {
    let rows = submissions
        .iter()
        .map(|submission| {
            let correctness = score_picks(&quiz.correct_answers, &submission.picks);
            let total_correct = correctness.iter().filter(|c| **c).count();

            SubmissionResult {
                submission_id: submission.id,
                group_name: submission.group_name.clone(),
                picks: submission.picks.clone(),
                correctness,
                total_correct,
                submitted_at: submission.created_at,
            }
        })
        .collect();

    QuizReport {
        quiz_id: quiz.id,
        quiz_title: quiz.title.clone(),
        code: quiz.code.clone(),
        question_indices: (0..quiz.correct_answers.len()).collect(),
        correct_answers: quiz.correct_answers.clone(),
        submissions: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(correct_answers: Vec<u32>) -> Quiz {
        Quiz {
            id: 1,
            code: "feedbeef".to_string(),
            title: "Photosynthesis".to_string(),
            question_count: correct_answers.len() as u32,
            option_count: 4,
            correct_answers,
            created_by: "t@school.org".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn submission(id: i64, group_name: &str, picks: Vec<u32>) -> Submission {
        Submission {
            id,
            quiz_id: 1,
            group_name: group_name.to_string(),
            picks,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn scores_positionally() {
        let report = build_report(&quiz(vec![1, 2, 0]), &[submission(1, "A", vec![1, 2, 1])]);

        let row = &report.submissions[0];
        assert_eq!(row.correctness, vec![true, true, false]);
        assert_eq!(row.total_correct, 2);
        assert_eq!(report.question_indices, vec![0, 1, 2]);
    }

    #[test]
    fn same_picks_in_other_order_are_not_correct() {
        assert_eq!(score_picks(&[0, 1, 2], &[2, 1, 0]), vec![false, true, false]);
    }

    #[test]
    fn missing_picks_count_as_wrong() {
        assert_eq!(score_picks(&[0, 1], &[0]), vec![true, false]);
    }

    #[test]
    fn keeps_storage_order_and_duplicate_groups() {
        let report = build_report(
            &quiz(vec![3]),
            &[
                submission(5, "Reds", vec![0]),
                submission(6, "Blues", vec![3]),
                submission(7, "Reds", vec![3]),
            ],
        );

        let names: Vec<_> = report.submissions.iter().map(|r| r.group_name.as_str()).collect();
        assert_eq!(names, vec!["Reds", "Blues", "Reds"]);
        let totals: Vec<_> = report.submissions.iter().map(|r| r.total_correct).collect();
        assert_eq!(totals, vec![0, 1, 1]);
    }

    #[test]
    fn empty_quiz_report_has_no_rows() {
        let report = build_report(&quiz(vec![0, 0]), &[]);
        assert_eq!(report.quiz_title, "Photosynthesis");
        assert!(report.submissions.is_empty());
    }
}
