// ABOUTME: Protein dose range selection and daily gram target resolution
// ABOUTME: Activity base range, goal adjustment, safety clamp, and the rationale text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Protein dose range
//!
//! Base ranges (g/kg/day) by activity:
//! - Low: 1.2-1.6
//! - Moderate: 1.6-2.0
//! - High: 1.8-2.2
//!
//! Goal adjustment is additive on both bounds (fat loss +0.2, muscle gain
//! +0.1). Bounds are rounded to 2 decimals and only then clamped to
//! [1.2, 2.7].

use crate::rounding::{round_to_decimals, round_to_whole};
use protein_core::constants::protein;
use protein_core::models::{ActivityLevel, Goal, ProteinRange};

/// Integer daily protein amounts derived from a range and a body weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTargets {
    /// Grams at the bottom of the range
    pub min_g: u32,
    /// Grams at the top of the range
    pub max_g: u32,
    /// Grams at the midpoint of the range
    pub target_g: u32,
}

/// Pick the recommended protein range for an activity level and goal
#[must_use]
pub fn calculate_protein_range(activity: ActivityLevel, goal: Goal) -> ProteinRange {
    let (base_min, base_max) = match activity {
        ActivityLevel::Low => protein::LOW_ACTIVITY_RANGE,
        ActivityLevel::Moderate => protein::MODERATE_ACTIVITY_RANGE,
        ActivityLevel::High => protein::HIGH_ACTIVITY_RANGE,
    };

    let adjustment = match goal {
        Goal::FatLoss => protein::FAT_LOSS_ADJUSTMENT,
        Goal::MuscleGain => protein::MUSCLE_GAIN_ADJUSTMENT,
        Goal::Maintenance => 0.0,
    };

    // Clamp after rounding
    ProteinRange {
        min_g_per_kg: round_to_decimals(base_min + adjustment, 2).max(protein::FLOOR_G_PER_KG),
        max_g_per_kg: round_to_decimals(base_max + adjustment, 2).min(protein::CEILING_G_PER_KG),
    }
}

/// Turn a g/kg range into whole-gram daily amounts for a body weight
///
/// Formula:
/// - min = round(`min_g_per_kg` x `weight_kg`)
/// - max = round(`max_g_per_kg` x `weight_kg`)
/// - target = round(midpoint x `weight_kg`)
///
/// Rounding is monotonic, so `min <= target <= max` holds for any ordered range.
#[must_use]
pub fn resolve_daily_targets(weight_kg: f64, range: &ProteinRange) -> DailyTargets {
    DailyTargets {
        min_g: round_to_whole(range.min_g_per_kg * weight_kg),
        max_g: round_to_whole(range.max_g_per_kg * weight_kg),
        target_g: round_to_whole(range.midpoint() * weight_kg),
    }
}

/// Explain the chosen range in plain language
#[must_use]
pub fn build_rationale(range: &ProteinRange) -> String {
    format!(
        "Based on your activity and goal, a range of {:.2}-{:.2} g/kg is appropriate. \
         Using your body weight, that translates to the amounts shown. \
         Hitting the middle of the range is a practical daily target.",
        range.min_g_per_kg, range.max_g_per_kg
    )
}
