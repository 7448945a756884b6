use crate::{ConfigError, ConfigErrorResult, DatabaseConfig, LogLevel, LoggingConfig, ServerConfig};

use std::str::FromStr;

use log::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the process environment.
    ///
    /// Required:
    /// - `DATABASE_URL` - sqlx connection string
    ///
    /// Optional:
    /// - `HOST` (default 0.0.0.0), `PORT` (default 8080)
    /// - `LOG_LEVEL` (default info), `LOG_COLORED` (default true)
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingEnv {
            name: "DATABASE_URL",
        })?;

        let mut server = ServerConfig::default();
        Self::apply_env_string("HOST", &mut server.host);
        Self::apply_env_parse("PORT", &mut server.port)?;

        let mut logging = LoggingConfig::default();
        if let Ok(value) = std::env::var("LOG_LEVEL") {
            // FromStr never fails; invalid values fall back to info
            logging.level = LogLevel::from_str(&value).unwrap();
        }
        Self::apply_env_bool("LOG_COLORED", &mut logging.colored)?;

        Ok(Self {
            server,
            database: DatabaseConfig { url },
            logging,
        })
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs credentials embedded in the url).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {} connection", self.database.scheme());
        info!(
            "  logging: level={:?}, colored={}",
            self.logging.level.0, self.logging.colored
        );
    }

    fn apply_env_string(name: &str, target: &mut String) {
        if let Ok(value) = std::env::var(name) {
            if !value.is_empty() {
                *target = value;
            }
        }
    }

    fn apply_env_parse<T: FromStr>(name: &'static str, target: &mut T) -> ConfigErrorResult<()> {
        if let Ok(value) = std::env::var(name) {
            *target = value
                .parse()
                .map_err(|_| ConfigError::config(format!("{name} is not a valid value: '{value}'")))?;
        }

        Ok(())
    }

    fn apply_env_bool(name: &'static str, target: &mut bool) -> ConfigErrorResult<()> {
        if let Ok(value) = std::env::var(name) {
            *target = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::config(format!(
                        "{name} must be a boolean, got '{value}'"
                    )));
                }
            };
        }

        Ok(())
    }
}
