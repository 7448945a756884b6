pub mod models;

pub use models::test_project::TestProject;

pub use error_location::ErrorLocation;
