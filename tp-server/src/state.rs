use sqlx::SqlitePool;

/// State shared by every request handler.
///
/// Requests are independent; the pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
