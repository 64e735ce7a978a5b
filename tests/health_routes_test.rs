// ABOUTME: HTTP integration tests for greeting, health, diagnostics, and fallback routes
// ABOUTME: Tests every non-calculation endpoint through the full router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use protein_api::config::environment::DatabaseHints;
use protein_api::config::ServerConfig;
use protein_api::routes::HealthRoutes;
use serde_json::Value;

// ============================================================================
// Greetings
// ============================================================================

#[tokio::test]
async fn test_root_greeting() {
    let response = AxumTestRequest::get("/").send(common::test_router()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Hello from the Protein Planner API!");
}

#[tokio::test]
async fn test_hello_endpoint() {
    let response = AxumTestRequest::get("/api/hello")
        .send(HealthRoutes::routes())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Hello from the backend API!");
}

// ============================================================================
// Health and readiness
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/health")
        .send(common::test_router())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "protein-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Diagnostics
// ============================================================================

#[tokio::test]
async fn test_diagnostics_without_database_settings() {
    let response = AxumTestRequest::get("/test").send(common::test_router()).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "not available");
    assert_eq!(body["database_url"], "not set");
    assert_eq!(body["database_name"], "not set");
    assert_eq!(body["connection_status"], "not connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn test_diagnostics_reports_configured_settings() {
    let config = ServerConfig {
        database: DatabaseHints {
            url_configured: true,
            name_configured: true,
        },
        ..ServerConfig::default()
    };
    let response = AxumTestRequest::get("/test")
        .send(common::test_router_with(config))
        .await;
    let body: Value = response.json();
    assert_eq!(body["database_url"], "set");
    assert_eq!(body["database_name"], "set");
    assert_eq!(body["connection_status"], "not connected");
}

// ============================================================================
// Unknown routes
// ============================================================================

#[tokio::test]
async fn test_unknown_route_returns_structured_404() {
    let response = AxumTestRequest::get("/api/carbs")
        .send(common::test_router())
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Route not found");
}
