use crate::{ConfigError, ConfigErrorResult};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. "sqlite://data.db?mode=rwc"
    pub url: String,
}

impl DatabaseConfig {
    /// Scheme portion of the url, safe to log (credentials stay out of logs).
    pub fn scheme(&self) -> &str {
        match self.url.split_once(':') {
            Some((scheme, _)) if !scheme.is_empty() => scheme,
            _ => "sqlite",
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::database("database url cannot be empty"));
        }

        if !self.url.starts_with("sqlite:") && self.url != ":memory:" {
            return Err(ConfigError::database(format!(
                "unsupported database url scheme: '{}' (expected sqlite:)",
                self.url
            )));
        }

        Ok(())
    }
}
