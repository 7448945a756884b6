//! Health and informational endpoints.

use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET / - Informational root with pointers to the docs and the API
pub async fn root() -> Response {
    let info = json!({
        "message": "Backend API is running",
        "status": "ok",
        "swagger": "/swagger",
        "api": "/api/test",
    });

    (StatusCode::OK, Json(info)).into_response()
}

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    // The pool is the only stateful component; probe it directly
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "ok",
        Err(e) => {
            log::warn!("Health check database probe failed: {}", e);
            "unreachable"
        }
    };

    let health = json!({
        "status": if database == "ok" { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe (ready to accept traffic?)
pub async fn readiness_check() -> Response {
    // The server only starts after the pool and schema are ready
    (StatusCode::OK, "Ready").into_response()
}
