use crate::Config;
use crate::tests::{EnvGuard, VALID_SECRET, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Handler
// =========================================================================

#[test]
#[serial]
fn given_timeout_zero_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _key = EnvGuard::set("BC_AUTH_JWT_SECRET", VALID_SECRET);
    let _timeout = EnvGuard::set("BC_HANDLER_TIMEOUT_SECS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_over_max_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _key = EnvGuard::set("BC_AUTH_JWT_SECRET", VALID_SECRET);
    let _timeout = EnvGuard::set("BC_HANDLER_TIMEOUT_SECS", "301");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_valid_timeout_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _key = EnvGuard::set("BC_AUTH_JWT_SECRET", VALID_SECRET);
    let _timeout = EnvGuard::set("BC_HANDLER_TIMEOUT_SECS", "60");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_timeout_over_max_when_validate_then_error_names_handler_section() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _key = EnvGuard::set("BC_AUTH_JWT_SECRET", VALID_SECRET);
    let _timeout = EnvGuard::set("BC_HANDLER_TIMEOUT_SECS", "301");

    // When
    let err_msg = Config::load().unwrap().validate().unwrap_err().to_string();

    // Then
    assert_that!(err_msg, contains_substring("[handler]"));
    assert_that!(err_msg, contains_substring("timeout_secs=301"));
}

#[test]
#[serial]
fn given_timeout_override_when_loaded_then_deadline_matches() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _timeout = EnvGuard::set("BC_HANDLER_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.handler.timeout(), eq(Duration::from_secs(45)));
}
