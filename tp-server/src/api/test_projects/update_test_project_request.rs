use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateTestProjectRequest {
    /// Replacement name (required). Same presence rule as create.
    #[serde(default)]
    pub name: Option<String>,
}
