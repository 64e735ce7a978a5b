// ABOUTME: Route module organization for the Protein Planner HTTP endpoints
// ABOUTME: Groups route definitions by domain, each with thin handlers over the calculation crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Protein Planner API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to `protein-intelligence`.

/// Diagnostics probe routes
pub mod diagnostics;
/// Health check and greeting routes
pub mod health;
/// Protein calculation routes
pub mod protein;

/// Diagnostics route handlers
pub use diagnostics::DiagnosticsRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Protein calculation route handlers
pub use protein::ProteinRoutes;
