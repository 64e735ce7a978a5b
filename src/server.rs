// ABOUTME: HTTP server assembly and lifecycle for the Protein Planner API
// ABOUTME: Builds the axum router with middleware layers and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Router construction and server lifecycle

use crate::config::ServerConfig;
use crate::middleware::{request_id_middleware, setup_cors, trace_layer};
use crate::routes::{DiagnosticsRoutes, HealthRoutes, ProteinRoutes};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use protein_core::errors::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

/// Build the application router with every route group and middleware layer.
///
/// Layer order, outermost first: request ID, tracing, timeout, CORS.
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let cors = setup_cors(&config);
    let timeout = Duration::from_secs(config.http.request_timeout_secs);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ProteinRoutes::routes())
        .merge(DiagnosticsRoutes::routes(config))
        .fallback(|| async { AppError::not_found("Route") })
        .layer(cors)
        .layer(TimeoutLayer::new(timeout))
        .layer(trace_layer())
        .layer(middleware::from_fn(request_id_middleware))
}

/// Bind the listener and serve until ctrl-c or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Protein Planner API listening on http://{address}");

    let router = build_router(Arc::new(config));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Resolve when the process receives ctrl-c or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Ctrl-C received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
    }
}
