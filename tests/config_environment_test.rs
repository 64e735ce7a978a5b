// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, defaults, validation, and summary output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use protein_api::config::environment::{Environment, ServerConfig};
use protein_api::logging::LoggingConfig;
use serial_test::serial;
use std::env;

const MANAGED_VARS: [&str; 8] = [
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "RUST_LOG",
    "CORS_ALLOWED_ORIGINS",
    "REQUEST_TIMEOUT_SECS",
    "DATABASE_URL",
    "DATABASE_NAME",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

// Tests for public configuration types

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Development.is_production());
}

#[test]
fn test_default_config() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.bind_address(), "0.0.0.0:8000");
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.http.request_timeout_secs, 30);
    assert!(!config.database.url_configured);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = ServerConfig::default();
    config.http.request_timeout_secs = 0;
    assert!(config.validate().is_err());

    let config = ServerConfig {
        host: "  ".to_owned(),
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_summary_hides_database_url() {
    let mut config = ServerConfig::default();
    config.database.url_configured = true;
    let summary = config.summary();
    assert!(summary.contains("Bind: 0.0.0.0:8000"));
    assert!(summary.contains("Database URL: Set"));
}

// Tests that mutate the process environment

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.database.url_configured);
    assert!(!config.database.name_configured);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("HOST", "127.0.0.1");
    env::set_var("PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");
    env::set_var("REQUEST_TIMEOUT_SECS", "5");
    env::set_var("DATABASE_URL", "mongodb://localhost:27017");
    env::set_var("DATABASE_NAME", "  ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "127.0.0.1:9090");
    assert!(config.environment.is_production());
    assert_eq!(config.cors.allowed_origins, "https://app.example.com");
    assert_eq!(config.http.request_timeout_secs, 5);
    assert!(config.database.url_configured);
    // Blank values count as unset
    assert!(!config.database.name_configured);
}

#[test]
#[serial]
fn test_from_env_invalid_port() {
    clear_env();
    env::set_var("PORT", "not-a-port");
    let result = ServerConfig::from_env();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_from_env_zero_timeout() {
    clear_env();
    env::set_var("REQUEST_TIMEOUT_SECS", "0");
    let result = ServerConfig::from_env();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_rust_log_owned_by_logging_config() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    let logging = LoggingConfig::from_env();
    let summary = ServerConfig::from_env().unwrap().summary();
    clear_env();

    assert_eq!(logging.level, "debug");
    assert!(!summary.contains("Log Level"));
    assert!(!summary.contains("debug"));
}
