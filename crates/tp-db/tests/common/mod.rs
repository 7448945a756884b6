#![allow(dead_code)]

//! Shared test fixtures for tp-db integration tests

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
