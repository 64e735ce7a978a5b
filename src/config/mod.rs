// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration for bind address, CORS, timeouts, and diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Protein Planner API
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file by the server binary). There is no configuration file.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
