// ABOUTME: Protein plan response models returned by the calculation engine
// ABOUTME: ProteinPlan, ProteinRange, MealPlan, MacroSplit, and SplitPercent definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Recommended protein dose in g/kg/day, serialized as `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ProteinRange {
    /// Lower bound (g/kg)
    pub min_g_per_kg: f64,
    /// Upper bound (g/kg)
    pub max_g_per_kg: f64,
}

impl ProteinRange {
    /// Midpoint of the range (g/kg)
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min_g_per_kg + self.max_g_per_kg) / 2.0
    }
}

impl From<(f64, f64)> for ProteinRange {
    fn from((min_g_per_kg, max_g_per_kg): (f64, f64)) -> Self {
        Self {
            min_g_per_kg,
            max_g_per_kg,
        }
    }
}

impl From<ProteinRange> for (f64, f64) {
    fn from(range: ProteinRange) -> Self {
        (range.min_g_per_kg, range.max_g_per_kg)
    }
}

/// Share of total calories per macronutrient, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPercent {
    /// Protein percentage
    pub protein: u8,
    /// Carbohydrate percentage
    pub carbs: u8,
    /// Fat percentage
    pub fats: u8,
}

impl SplitPercent {
    /// Create a split from protein/carbs/fat percentages
    #[must_use]
    pub const fn new(protein: u8, carbs: u8, fats: u8) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }

    /// Sum of the three shares (not guaranteed to be 100 after goal adjustment)
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.protein as u16 + self.carbs as u16 + self.fats as u16
    }
}

/// Gram and calorie targets for one meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Daily protein, multiple of 5 g
    pub protein_g: u32,
    /// Daily carbohydrate, multiple of 5 g
    pub carbs_g: u32,
    /// Daily fat, multiple of 5 g
    pub fats_g: u32,
    /// Percentages the grams were derived from
    pub split_percent: SplitPercent,
    /// Total daily calories implied by the split
    pub calories: u32,
}

/// One themed meal plan suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Archetype name
    pub name: String,
    /// One-line pitch
    pub tagline: String,
    /// Macro targets
    pub macros: MacroSplit,
    /// Four example meals
    pub sample_meals: Vec<String>,
}

/// Full result of a protein calculation, as returned by `POST /api/protein`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinPlan {
    /// Body weight in kilograms, rounded to 2 decimals
    pub weight_kg: f64,
    /// Recommended dose range
    pub grams_per_kg_range: ProteinRange,
    /// Daily grams at the bottom of the range
    pub daily_grams_min: u32,
    /// Daily grams at the top of the range
    pub daily_grams_max: u32,
    /// Daily grams at the midpoint of the range
    pub daily_grams_target: u32,
    /// Plain-language explanation of the numbers
    pub rationale: String,
    /// Meal plan suggestions, in fixed archetype order
    pub suggestions: Vec<MealPlan>,
}
