// ABOUTME: Rounding helpers used across the protein calculation pipeline
// ABOUTME: One rule everywhere: round half away from zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! All rounding in the engine goes through these helpers so that daily gram
//! amounts, dose bounds, and macro grams agree with each other. Ties round
//! away from zero (`f64::round`), e.g. `128.5 -> 129`.

use protein_core::constants::units::MACRO_GRAM_STEP;

/// Round to `decimals` places, ties away from zero
#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the nearest whole gram or kcal
#[must_use]
pub fn round_to_whole(value: f64) -> u32 {
    // Safe: engine inputs are validated positive and bounded
    value.round() as u32
}

/// Round to the nearest multiple of 5 (`round(value / 5) * 5`)
#[must_use]
pub fn round_to_step_of_five(value: f64) -> u32 {
    // Safe: engine inputs are validated positive and bounded
    ((value / MACRO_GRAM_STEP).round() * MACRO_GRAM_STEP) as u32
}
