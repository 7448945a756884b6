pub mod test_project_repository;
