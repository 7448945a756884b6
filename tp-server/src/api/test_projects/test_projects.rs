//! Test project REST API handlers
//!
//! CRUD access to the test_projects table. Identifier path segments arrive
//! as raw strings and are parsed here so a malformed id maps to a 400.

use crate::{
    ApiError, ApiResult, AppState, CreateTestProjectRequest, DeleteResponse, TestProjectDto,
    UpdateTestProjectRequest,
};

use tp_db::TestProjectRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/test
///
/// List all test projects
pub async fn list_test_projects(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TestProjectDto>>> {
    let repo = TestProjectRepository::new(state.pool.clone());
    let test_projects = repo.find_all().await?;

    Ok(Json(
        test_projects.into_iter().map(TestProjectDto::from).collect(),
    ))
}

/// GET /api/test/:id
///
/// Get a single test project by ID
pub async fn get_test_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TestProjectDto>> {
    let id = parse_id(&id)?;

    let repo = TestProjectRepository::new(state.pool.clone());
    let test_project = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Test project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(test_project.into()))
}

/// POST /api/test
///
/// Create a new test project from a required, non-empty name
pub async fn create_test_project(
    State(state): State<AppState>,
    Json(req): Json<CreateTestProjectRequest>,
) -> ApiResult<(StatusCode, Json<TestProjectDto>)> {
    let name = require_name(req.name)?;

    let repo = TestProjectRepository::new(state.pool.clone());
    let id = repo.create(&name).await?;

    log::info!("Created test project {} ({})", id, name);

    Ok((StatusCode::CREATED, Json(TestProjectDto { id, name })))
}

/// PUT /api/test/:id
///
/// Replace the name of an existing test project
pub async fn update_test_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTestProjectRequest>,
) -> ApiResult<Json<TestProjectDto>> {
    let id = parse_id(&id)?;
    let name = require_name(req.name)?;

    let repo = TestProjectRepository::new(state.pool.clone());
    let updated = repo.update(id, &name).await?;
    if !updated {
        return Err(ApiError::NotFound {
            message: format!("Test project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Updated test project {}", id);

    Ok(Json(TestProjectDto { id, name }))
}

/// DELETE /api/test/:id
pub async fn delete_test_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;

    let repo = TestProjectRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("Test project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted test project {}", id);

    Ok(Json(DeleteResponse { deleted: true, id }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse the raw id path segment; non-integer values map to a 400.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::BadRequest {
        message: format!("Invalid id: '{}'", raw),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Extract a required, non-empty name from a request body.
fn require_name(name: Option<String>) -> ApiResult<String> {
    let name = name.map(|n| n.trim().to_string()).unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::Validation {
            message: "Test project name cannot be empty".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(name)
}
