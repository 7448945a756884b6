use tp_core::TestProject;

use serde::Serialize;

/// Test project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TestProjectDto {
    pub id: i64,
    pub name: String,
}

impl From<TestProject> for TestProjectDto {
    fn from(p: TestProject) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}
