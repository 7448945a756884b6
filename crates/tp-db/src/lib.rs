pub mod error;
pub mod repositories;
pub mod schema;

pub use error::{DbError, Result};
pub use repositories::test_project_repository::TestProjectRepository;
pub use schema::ensure_schema;
