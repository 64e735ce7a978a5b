// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides greeting, health, and readiness endpoints for clients and load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! This module provides the root greeting, a frontend connectivity check,
//! and health/readiness endpoints for load balancer probes.

use protein_core::constants::{endpoints, service_names};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "Hello from the Protein Planner API!"
            }))
        }

        async fn hello_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "Hello from the backend API!"
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(status_body("healthy"))
        }

        async fn ready_handler() -> Json<serde_json::Value> {
            Json(status_body("ready"))
        }

        Router::new()
            .route("/", get(root_handler))
            .route(endpoints::HELLO, get(hello_handler))
            .route(endpoints::HEALTH_CHECK, get(health_handler))
            .route(endpoints::READY_CHECK, get(ready_handler))
    }
}

fn status_body(status: &str) -> serde_json::Value {
    serde_json::json!({
        "status": status,
        "service": service_names::PROTEIN_API,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })
}
