// ABOUTME: Protein plan pipeline entry point combining every calculation step
// ABOUTME: Normalize weight, pick range, resolve daily grams, generate meal plans, assemble
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::meal_plans::generate_meal_plans;
use crate::protein_range::{build_rationale, calculate_protein_range, resolve_daily_targets};
use crate::rounding::round_to_decimals;
use crate::units::normalize_weight;
use protein_core::errors::AppResult;
use protein_core::models::{IntakeRequest, ProteinPlan};
use tracing::debug;

/// Calculate the complete protein plan for a validated intake request
///
/// This is the main entry point combining unit normalization, range
/// selection, daily target resolution, and meal plan generation.
///
/// # Errors
///
/// Only fails if the request's weight is out of range, which cannot happen
/// for an `IntakeRequest` built through validation
pub fn calculate_protein_plan(request: &IntakeRequest) -> AppResult<ProteinPlan> {
    // Step 1: Normalize to kilograms
    let weight_kg = normalize_weight(request.weight(), request.unit())?;

    // Step 2: Dose range for activity and goal
    let range = calculate_protein_range(request.activity(), request.goal());

    // Step 3: Whole-gram daily amounts
    let targets = resolve_daily_targets(weight_kg, &range);

    // Step 4: Meal plans anchored on the target
    let suggestions = generate_meal_plans(targets.target_g, request.goal());

    debug!(
        weight_kg,
        activity = %request.activity(),
        goal = %request.goal(),
        min_g_per_kg = range.min_g_per_kg,
        max_g_per_kg = range.max_g_per_kg,
        target_g = targets.target_g,
        "Protein plan calculated"
    );

    Ok(ProteinPlan {
        weight_kg: round_to_decimals(weight_kg, 2),
        grams_per_kg_range: range,
        daily_grams_min: targets.min_g,
        daily_grams_max: targets.max_g,
        daily_grams_target: targets.target_g,
        rationale: build_rationale(&range),
        suggestions,
    })
}
