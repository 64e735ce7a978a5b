// ABOUTME: HTTP middleware for request tracing, request IDs, and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS setup for the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing configuration
pub mod cors;
/// Request ID generation and propagation
pub mod request_id;
/// Tracing spans for HTTP requests
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request ID middleware
pub use request_id::{request_id_middleware, RequestId};

// Request tracing
pub use tracing::{create_request_span, trace_layer};
