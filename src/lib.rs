// ABOUTME: Main library entry point for the Protein Planner API
// ABOUTME: Wires configuration, logging, middleware, and routes into an axum HTTP service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Protein Planner API
//!
//! A small HTTP service that turns body weight, activity level, and goal into
//! a daily protein range plus four themed macro meal plans.
//!
//! ## Architecture
//!
//! - **`protein-core`**: error types, constants, request and response models
//! - **`protein-intelligence`**: the pure calculation pipeline
//! - **this crate**: configuration, logging, middleware, routes, and the server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use protein_api::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     protein_api::server::run(config).await
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs, tracing)
pub mod middleware;

/// HTTP route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

// Re-export the workspace crates so binaries and tests need one import path
pub use protein_core::{constants, errors, models};
pub use protein_intelligence as intelligence;
