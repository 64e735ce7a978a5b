// ABOUTME: Diagnostics probe route reporting backend and database configuration status
// ABOUTME: Answers GET /test without touching any external system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use axum::{extract::State, routing::get, Json, Router};
use protein_core::constants::endpoints;
use serde::Serialize;
use std::sync::Arc;

/// Diagnostics probe body
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    /// Always `running` when the handler answers
    pub backend: &'static str,
    /// The service has no database layer
    pub database: &'static str,
    /// `set` / `not set`
    pub database_url: &'static str,
    /// `set` / `not set`
    pub database_name: &'static str,
    /// Always `not connected`
    pub connection_status: &'static str,
    /// Always empty
    pub collections: Vec<String>,
}

impl DiagnosticsReport {
    /// Build the report from configuration
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            backend: "running",
            database: "not available",
            database_url: set_label(config.database.url_configured),
            database_name: set_label(config.database.name_configured),
            connection_status: "not connected",
            collections: Vec::new(),
        }
    }
}

const fn set_label(configured: bool) -> &'static str {
    if configured {
        "set"
    } else {
        "not set"
    }
}

/// Diagnostics routes implementation
pub struct DiagnosticsRoutes;

impl DiagnosticsRoutes {
    /// Create the diagnostics route
    pub fn routes(config: Arc<ServerConfig>) -> Router {
        Router::new()
            .route(endpoints::DIAGNOSTICS, get(Self::handle_probe))
            .with_state(config)
    }

    async fn handle_probe(State(config): State<Arc<ServerConfig>>) -> Json<DiagnosticsReport> {
        Json(DiagnosticsReport::from_config(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::DatabaseHints;

    #[test]
    fn test_report_reflects_database_hints() {
        let mut config = ServerConfig::default();
        let report = DiagnosticsReport::from_config(&config);
        assert_eq!(report.database_url, "not set");
        assert_eq!(report.database_name, "not set");

        config.database = DatabaseHints {
            url_configured: true,
            name_configured: false,
        };
        let report = DiagnosticsReport::from_config(&config);
        assert_eq!(report.backend, "running");
        assert_eq!(report.database, "not available");
        assert_eq!(report.database_url, "set");
        assert_eq!(report.database_name, "not set");
        assert_eq!(report.connection_status, "not connected");
        assert!(report.collections.is_empty());
    }
}
