//! Schema bootstrap for the test_projects table.

use crate::{DbError, Result as DbErrorResult};

use tp_core::ErrorLocation;

use std::panic::Location;

use sqlx::SqlitePool;

const CREATE_TEST_PROJECTS: &str = r#"
    CREATE TABLE IF NOT EXISTS test_projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

/// Ensure the test_projects table exists. Idempotent; runs once at startup.
pub async fn ensure_schema(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::query(CREATE_TEST_PROJECTS)
        .execute(pool)
        .await
        .map_err(|e| DbError::Initialization {
            message: format!("creating test_projects table: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
