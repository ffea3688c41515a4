// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Email of the distinguished administrator account when `ADMIN_EMAIL` is unset.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@ri.edu.sg";

/// Password seeded for the administrator when `ADMIN_PASSWORD` is unset.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Password1";

/// Length of a quiz join code.
pub const QUIZ_CODE_LENGTH: usize = 8;

/// How many fresh codes are tried before giving up on a collision.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Longest quiz title, in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;

/// Longest group name, in characters, after trimming.
pub const MAX_GROUP_NAME_CHARS: usize = 100;

/// How long a writer waits on a locked SQLite file before giving up.
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub admin_email: String,
    pub admin_password: String,
    pub bind_addr: String,
    /// Base URL students open to join a quiz, e.g. `https://quiz.example.org`.
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quiz.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let admin_email = env::var("ADMIN_EMAIL")
            .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());

        let admin_password = env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            admin_email,
            admin_password,
            bind_addr,
            public_base_url,
        }
    }
}
