//! Test project entity - the single resource exposed by the API.

use serde::{Deserialize, Serialize};

/// A test project is a flat record: a server-assigned integer identifier
/// and a required name. The identifier is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestProject {
    pub id: i64,
    pub name: String,
}

impl TestProject {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
