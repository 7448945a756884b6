pub mod api;
pub mod docs;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    test_projects::{
        create_test_project_request::CreateTestProjectRequest,
        test_project_dto::TestProjectDto,
        test_projects::{
            create_test_project, delete_test_project, get_test_project, list_test_projects,
            update_test_project,
        },
        update_test_project_request::UpdateTestProjectRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
