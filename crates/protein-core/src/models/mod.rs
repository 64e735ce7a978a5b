// ABOUTME: Data models shared between the calculation engine and the HTTP layer
// ABOUTME: Intake request validation and the protein plan response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Models for the protein planner
//!
//! - `intake`: what the client sends, and the validated form the engine accepts
//! - `plan`: what the engine returns and the API serializes

/// Intake request models and validation
pub mod intake;
/// Protein plan response models
pub mod plan;

pub use intake::{validate_weight, ActivityLevel, Goal, IntakeRequest, ProteinRequest, Sex, WeightUnit};
pub use plan::{MacroSplit, MealPlan, ProteinPlan, ProteinRange, SplitPercent};
