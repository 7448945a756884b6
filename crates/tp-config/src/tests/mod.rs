mod config;
mod database;

use std::env;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every variable Config::load reads, keeping guards alive for the test
pub(crate) fn clear_config_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::remove("DATABASE_URL"),
        EnvGuard::remove("HOST"),
        EnvGuard::remove("PORT"),
        EnvGuard::remove("LOG_LEVEL"),
        EnvGuard::remove("LOG_COLORED"),
    ]
}
