use crate::DatabaseConfig;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_sqlite_file_url_when_validated_then_ok() {
    let config = DatabaseConfig {
        url: String::from("sqlite://data.db?mode=rwc"),
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_sqlite_memory_url_when_validated_then_ok() {
    let config = DatabaseConfig {
        url: String::from("sqlite::memory:"),
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_empty_url_when_validated_then_error() {
    let config = DatabaseConfig { url: String::new() };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_unsupported_scheme_when_validated_then_error() {
    let config = DatabaseConfig {
        url: String::from("postgres://localhost/app"),
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_url_when_scheme_extracted_then_credentials_are_not_included() {
    let config = DatabaseConfig {
        url: String::from("sqlite://secret-dir/data.db"),
    };

    assert_that!(config.scheme(), eq("sqlite"));
}
