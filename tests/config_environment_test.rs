// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Defaults, overrides, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use vitals_charts::config::environment::{
    DATABASE_URL_ENV, FALLBACK_WEIGHT_ENV, STORE_TIMEOUT_ENV,
};
use vitals_charts::config::{ChartsConfig, DatabaseUrl};
use vitals_charts::logging::{LogFormat, LoggingConfig};
use vitals_core::errors::ErrorCode;

fn clear_env() {
    for key in [
        DATABASE_URL_ENV,
        STORE_TIMEOUT_ENV,
        FALLBACK_WEIGHT_ENV,
        "LOG_FORMAT",
        "SERVICE_NAME",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ChartsConfig::from_env().unwrap();
    assert_eq!(config.database_url, DatabaseUrl::default());
    assert_eq!(config.store_timeout, None);
    assert!((config.fallback_weight_kg - 70.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(DATABASE_URL_ENV, "sqlite:/tmp/vitals-test.db");
    env::set_var(STORE_TIMEOUT_ENV, "1500");
    env::set_var(FALLBACK_WEIGHT_ENV, "82.5");

    let config = ChartsConfig::from_env().unwrap();
    assert_eq!(
        config.database_url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("/tmp/vitals-test.db")
        }
    );
    assert_eq!(config.store_timeout, Some(Duration::from_millis(1500)));
    assert!((config.fallback_weight_kg - 82.5).abs() < f64::EPSILON);
    assert!(config.summary().contains("read_timeout=1500ms"));
    clear_env();
}

#[test]
#[serial]
fn test_memory_store_url() {
    clear_env();
    env::set_var(DATABASE_URL_ENV, "memory://");
    let config = ChartsConfig::from_env().unwrap();
    assert_eq!(config.database_url, DatabaseUrl::Memory);
    assert_eq!(config.database_url.to_connection_string(), "memory://");
    clear_env();
}

#[test]
#[serial]
fn test_malformed_values_are_config_errors() {
    clear_env();
    env::set_var(STORE_TIMEOUT_ENV, "fast");
    assert_eq!(
        ChartsConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    clear_env();
    env::set_var(FALLBACK_WEIGHT_ENV, "-3");
    assert_eq!(
        ChartsConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "vitals-test");
    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "vitals-test");
    clear_env();
}
