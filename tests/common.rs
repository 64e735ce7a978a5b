// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging initialization and router factories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `protein_api`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use protein_api::config::ServerConfig;
use protein_api::server::build_router;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        // Another test binary helper may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Default configuration for router tests
pub fn test_config() -> ServerConfig {
    ServerConfig::default()
}

/// Full application router with default configuration
pub fn test_router() -> axum::Router {
    init_test_logging();
    build_router(Arc::new(test_config()))
}

/// Full application router with a custom configuration
pub fn test_router_with(config: ServerConfig) -> axum::Router {
    init_test_logging();
    build_router(Arc::new(config))
}
