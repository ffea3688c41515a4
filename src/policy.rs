// src/policy.rs

//! Access decisions for the teacher console. Pure functions over an explicit
//! actor; nothing here touches the store.

use serde::{Deserialize, Serialize};

use crate::models::{
    quiz::Quiz,
    teacher::{Role, TeacherAccount},
};

/// The authenticated teacher a request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl Actor {
    /// Builds the actor for an authenticated account. Admin rights follow the
    /// currently configured admin email, so changing `ADMIN_EMAIL` moves them.
    pub fn for_account(account: &TeacherAccount, admin_email: &str) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            role: Role::for_email(&account.email, admin_email),
        }
    }
}

/// Gates teacher management and the unrestricted quiz listing.
pub fn is_admin(actor: &Actor) -> bool {
    actor.role == Role::Admin
}

/// The administrator may access every quiz, a teacher only their own.
pub fn can_access_quiz(actor: &Actor, quiz: &Quiz) -> bool {
    is_admin(actor) || actor.email == quiz.created_by
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ADMIN_EMAIL;

    fn actor(id: i64, email: &str) -> Actor {
        Actor {
            id,
            email: email.to_string(),
            role: Role::for_email(email, DEFAULT_ADMIN_EMAIL),
        }
    }

    fn quiz_owned_by(email: &str) -> Quiz {
        Quiz {
            id: 7,
            code: "0a1b2c3d".to_string(),
            title: "Cells".to_string(),
            question_count: 1,
            option_count: 4,
            correct_answers: vec![2],
            created_by: email.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn owner_can_access_own_quiz() {
        let quiz = quiz_owned_by("owner@school.org");
        assert!(can_access_quiz(&actor(2, "owner@school.org"), &quiz));
    }

    #[test]
    fn admin_can_access_any_quiz() {
        let quiz = quiz_owned_by("owner@school.org");
        let admin = actor(1, DEFAULT_ADMIN_EMAIL);
        assert!(is_admin(&admin));
        assert!(can_access_quiz(&admin, &quiz));
    }

    #[test]
    fn other_teacher_is_denied() {
        let quiz = quiz_owned_by("owner@school.org");
        let other = actor(3, "other@school.org");
        assert!(!is_admin(&other));
        assert!(!can_access_quiz(&other, &quiz));
    }

    #[test]
    fn ownership_is_case_sensitive() {
        let quiz = quiz_owned_by("owner@school.org");
        assert!(!can_access_quiz(&actor(4, "Owner@school.org"), &quiz));
    }

    #[test]
    fn admin_role_comes_from_the_configured_email() {
        let account = TeacherAccount {
            id: 5,
            email: "head@school.org".to_string(),
            password: String::new(),
            created_at: chrono::Utc::now(),
        };

        assert!(!is_admin(&Actor::for_account(&account, DEFAULT_ADMIN_EMAIL)));

        let promoted = Actor::for_account(&account, "head@school.org");
        assert!(is_admin(&promoted));
        assert!(can_access_quiz(&promoted, &quiz_owned_by("owner@school.org")));
    }

    #[test]
    fn access_matches_email_rule_for_all_pairs() {
        let emails = [DEFAULT_ADMIN_EMAIL, "a@school.org", "b@school.org", "A@school.org"];
        for (i, actor_email) in emails.iter().enumerate() {
            for owner in &emails {
                let expected = *actor_email == DEFAULT_ADMIN_EMAIL || actor_email == owner;
                assert_eq!(
                    can_access_quiz(&actor(i as i64, actor_email), &quiz_owned_by(owner)),
                    expected,
                    "actor {} on quiz of {}",
                    actor_email,
                    owner
                );
            }
        }
    }
}
