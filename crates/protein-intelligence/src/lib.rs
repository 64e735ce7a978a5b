// ABOUTME: Protein recommendation engine for the protein planner API
// ABOUTME: Sequential pipeline from body weight to dose range, daily grams, and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Protein Intelligence
//!
//! Pure, synchronous calculation pipeline:
//!
//! 1. [`units`] converts the reported weight to kilograms
//! 2. [`protein_range`] picks the g/kg range for activity and goal, then
//!    resolves daily gram amounts
//! 3. [`meal_plans`] turns the daily target into four archetype plans
//! 4. [`calculator`] runs the steps in order and assembles the response
//!
//! Every function is deterministic and free of shared state, so the engine
//! can be called from any number of request handlers concurrently.

/// Pipeline entry point
pub mod calculator;
/// Archetype meal plans and macro splits
pub mod meal_plans;
/// Dose range and daily gram targets
pub mod protein_range;
/// Rounding rules shared by every step
pub mod rounding;
/// Weight unit normalization
pub mod units;

pub use calculator::calculate_protein_plan;
pub use meal_plans::{adjust_split, calculate_macros, generate_meal_plans, sample_meals, ARCHETYPES};
pub use protein_range::{build_rationale, calculate_protein_range, resolve_daily_targets, DailyTargets};
pub use units::normalize_weight;
