// src/db.rs

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

use crate::config::SQLITE_BUSY_TIMEOUT_SECS;

/// Opens the store. Foreign keys are enforced so a submission always names a quiz.
///
/// An in-memory database lives and dies with its connection, so it gets a
/// single connection that is never recycled. File databases run in WAL mode
/// with a busy timeout so parallel writers queue instead of failing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
    } else {
        let options = options
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(SQLITE_BUSY_TIMEOUT_SECS));

        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
    }
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
