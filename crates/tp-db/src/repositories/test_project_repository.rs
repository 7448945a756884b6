//! Test project repository for CRUD operations on test projects.
//!
//! Every operation is a single parameterized statement against the shared
//! pool; there are no retries and no multi-statement transactions.

use crate::Result as DbErrorResult;

use tp_core::TestProject;

use sqlx::{Row, SqlitePool};

pub struct TestProjectRepository {
    pool: SqlitePool,
}

impl TestProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All records, ordered by id so listings are deterministic.
    pub async fn find_all(&self) -> DbErrorResult<Vec<TestProject>> {
        let rows = sqlx::query("SELECT id, name FROM test_projects ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| -> DbErrorResult<TestProject> {
                Ok(TestProject {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<TestProject>> {
        let row = sqlx::query("SELECT id, name FROM test_projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| -> DbErrorResult<TestProject> {
            Ok(TestProject {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
            })
        })
        .transpose()
    }

    /// Insert a record and return the generated identifier.
    pub async fn create(&self, name: &str) -> DbErrorResult<i64> {
        let result = sqlx::query("INSERT INTO test_projects (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace the name of an existing record.
    /// Returns false when no row matched the id.
    pub async fn update(&self, id: i64, name: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE test_projects SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row matched the id.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM test_projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
