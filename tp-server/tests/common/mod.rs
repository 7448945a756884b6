#![allow(dead_code)]

//! Test infrastructure for tp-server API tests

use tp_server::AppState;

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    tp_db::ensure_schema(&pool)
        .await
        .expect("Failed to create schema");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a test project directly, returning its id
pub async fn create_test_project(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO test_projects (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to create test project")
        .last_insert_rowid()
}
