use crate::api::test_projects::test_projects::{
    create_test_project, delete_test_project, get_test_project, list_test_projects,
    update_test_project,
};
use crate::{AppState, docs, health};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Informational root
        .route("/", get(health::root))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Embedded API documentation
        .route("/swagger", get(docs::swagger_ui))
        .route("/swagger.json", get(docs::swagger_json))
        // Test project CRUD; the trailing-slash collection path dispatches
        // identically to the bare one
        .route(
            "/api/test",
            get(list_test_projects).post(create_test_project),
        )
        .route(
            "/api/test/",
            get(list_test_projects).post(create_test_project),
        )
        .route(
            "/api/test/{id}",
            get(get_test_project)
                .put(update_test_project)
                .delete(delete_test_project),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
