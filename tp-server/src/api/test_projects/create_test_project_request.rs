use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTestProjectRequest {
    /// Project name (required). Kept optional at the serde layer so a
    /// missing field surfaces as a validation error, not a body rejection.
    #[serde(default)]
    pub name: Option<String>,
}
