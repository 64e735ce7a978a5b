// ABOUTME: Weight unit normalization for protein calculations
// ABOUTME: Validates the raw weight in its own unit, then converts pounds to kilograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use protein_core::constants::units::KG_PER_POUND;
use protein_core::errors::AppResult;
use protein_core::models::{validate_weight, WeightUnit};

/// Convert a reported body weight to kilograms
///
/// Formula: `weight_kg = weight` for kilograms, `weight x 0.45359237` for pounds.
/// The bounds check runs on the original value, so 1000 lb is accepted and
/// 1001 lb is rejected even though both are under 1000 kg.
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` when `weight` is not positive, not finite, or
/// above 1000 in its own unit
pub fn normalize_weight(weight: f64, unit: WeightUnit) -> AppResult<f64> {
    let weight = validate_weight(weight)?;
    Ok(match unit {
        WeightUnit::Kilogram => weight,
        WeightUnit::Pound => weight * KG_PER_POUND,
    })
}
