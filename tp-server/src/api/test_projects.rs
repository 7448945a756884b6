pub mod create_test_project_request;
pub mod test_project_dto;
pub mod test_projects;
pub mod update_test_project_request;
