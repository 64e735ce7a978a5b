// ABOUTME: Core types and constants for the protein planner API
// ABOUTME: Foundation crate with error handling, wire models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Protein Core
//!
//! Foundation crate providing shared types and constants for the protein
//! planner API. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP responses
//! - **constants**: Domain constants (unit conversion, bounds, archetype splits)
//! - **models**: Intake request/response types shared by the engine and the HTTP layer

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Intake request, validation, and plan response models
pub mod models;
