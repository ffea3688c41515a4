// src/models/teacher.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Privilege level of a teacher, decided when they authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
}

impl Role {
    /// The administrator is whoever owns the configured admin email.
    pub fn for_email(email: &str, admin_email: &str) -> Self {
        if email == admin_email {
            Role::Admin
        } else {
            Role::Teacher
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the 'teachers' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeacherAccount {
    pub id: i64,

    /// Unique, compared case-sensitively.
    pub email: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Row of the administrator's teacher listing.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TeacherSummary {
    pub id: i64,
    pub email: String,
}

/// DTO for creating a teacher account (sign-up or by the administrator).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    #[validate(length(
        min = 4,
        max = 128,
        message = "Password length must be between 4 and 128 characters."
    ))]
    pub password: String,
}

/// DTO for teacher login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}
