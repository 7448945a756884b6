use crate::Config;
use crate::tests::{EnvGuard, clear_config_env};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Load Tests
// =========================================================================

#[test]
#[serial]
fn given_no_database_url_when_loaded_then_error() {
    // Given
    let _env = clear_config_env();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_database_url_when_loaded_then_defaults_applied() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite::memory:");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host, eq("0.0.0.0"));
    assert_that!(config.server.port, eq(8080));
    assert_that!(config.logging.level.0, eq(LevelFilter::Info));
    assert_that!(config.logging.colored, eq(true));
}

#[test]
#[serial]
fn given_port_override_when_loaded_then_port_applied() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite::memory:");
    let _port = EnvGuard::set("PORT", "9000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.bind_addr(), eq("0.0.0.0:9000"));
}

#[test]
#[serial]
fn given_invalid_port_when_loaded_then_error() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite::memory:");
    let _port = EnvGuard::set("PORT", "not-a-port");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_log_level_debug_when_loaded_then_level_applied() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite::memory:");
    let _level = EnvGuard::set("LOG_LEVEL", "debug");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_invalid_log_level_when_loaded_then_falls_back_to_info() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite::memory:");
    let _level = EnvGuard::set("LOG_LEVEL", "loudest");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_invalid_log_colored_when_loaded_then_error() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite::memory:");
    let _colored = EnvGuard::set("LOG_COLORED", "maybe");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Validation Tests
// =========================================================================

#[test]
#[serial]
fn given_valid_env_when_validated_then_ok() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite://data.db?mode=rwc");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_empty_host_when_validated_then_error() {
    // Given
    let _env = clear_config_env();
    let _db = EnvGuard::set("DATABASE_URL", "sqlite::memory:");

    // When
    let mut config = Config::load().unwrap();
    config.server.host = String::from("  ");
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
