// ABOUTME: Themed meal plan generation from a daily protein target
// ABOUTME: Archetype table, goal-adjusted macro splits, calorie derivation, and sample meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan archetypes
//!
//! Each archetype fixes a protein/carbs/fat calorie split. The daily protein
//! target anchors the plan: protein calories are `target x 4 kcal`, and that
//! amount is the archetype's protein share of the total. Carbs and fat are
//! then derived from the same total.
//!
//! Fat loss moves 5 points from carbs to protein (protein capped at 45%,
//! carbs floored at 30%). Any remainder is pushed into fat, floored at 20%.
//! The floor on fat means the split is not guaranteed to total 100 for an
//! arbitrary base split; every shipped archetype does total 100 for every goal.

use crate::rounding::{round_to_step_of_five, round_to_whole};
use protein_core::constants::macro_split::{
    CARBS_FLOOR_PCT, FAT_FLOOR_PCT, FAT_LOSS_PROTEIN_BUMP, PROTEIN_CAP_PCT,
};
use protein_core::constants::units::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use protein_core::models::{Goal, MacroSplit, MealPlan, SplitPercent};
use tracing::debug;

/// A named meal plan theme with its base calorie split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    /// Display name, also the sample meal lookup key
    pub name: &'static str,
    /// One-line pitch
    pub tagline: &'static str,
    /// Split before goal adjustment
    pub base_split: SplitPercent,
}

/// Archetypes in response order
pub const ARCHETYPES: [Archetype; 4] = [
    Archetype {
        name: "Lifting Beast",
        tagline: "Build thick strength with steady carbs.",
        base_split: SplitPercent::new(30, 45, 25),
    },
    Archetype {
        name: "Mat Dominator",
        tagline: "Mat-ready power with cutting-edge leanness.",
        base_split: SplitPercent::new(35, 35, 30),
    },
    Archetype {
        name: "Track Rocket",
        tagline: "Explosive speed fueled by fast carbs.",
        base_split: SplitPercent::new(25, 50, 25),
    },
    Archetype {
        name: "Grand Tour Engine",
        tagline: "Endurance-first fuel for long days in the saddle.",
        base_split: SplitPercent::new(20, 60, 20),
    },
];

const GENERIC_MEALS: [&str; 4] = [
    "Breakfast: Eggs + oats + fruit",
    "Lunch: Chicken rice bowl",
    "Snack: Yogurt + nuts",
    "Dinner: Fish, potatoes, vegetables",
];

/// Example day of eating for an archetype, with a generic fallback
#[must_use]
pub fn sample_meals(archetype_name: &str) -> [&'static str; 4] {
    match archetype_name {
        "Lifting Beast" => [
            "Breakfast: Greek yogurt parfait + oats + whey",
            "Lunch: Steak bowl with rice, beans, salsa",
            "Snack: Cottage cheese + fruit + almonds",
            "Dinner: Chicken thighs, potatoes, roasted veg",
        ],
        "Mat Dominator" => [
            "Breakfast: Egg white omelet + spinach + toast",
            "Lunch: Turkey rice bowl + kimchi",
            "Snack: Beef jerky + banana",
            "Dinner: Salmon, quinoa, mixed greens",
        ],
        "Track Rocket" => [
            "Breakfast: Protein pancakes + berries",
            "Lunch: Teriyaki chicken + jasmine rice",
            "Snack: Low-fat chocolate milk + pretzels",
            "Dinner: Lean beef pasta + tomato sauce",
        ],
        "Grand Tour Engine" => [
            "Breakfast: Oats + honey + whey + banana",
            "Ride Fuel: Rice cakes + isotonic drink",
            "Lunch: Tuna baguette + fruit",
            "Dinner: Chicken risotto + olive oil drizzle",
        ],
        _ => GENERIC_MEALS,
    }
}

/// Apply the goal adjustment to a base split
///
/// Order of operations:
/// 1. protein = min(45, protein + bump)
/// 2. carbs = max(30, carbs - bump)
/// 3. if the total is not 100, fat = max(20, fat + (100 - total))
///
/// where bump is 5 for fat loss and 0 otherwise.
#[must_use]
pub fn adjust_split(base: SplitPercent, goal: Goal) -> SplitPercent {
    let bump = match goal {
        Goal::FatLoss => FAT_LOSS_PROTEIN_BUMP,
        Goal::Maintenance | Goal::MuscleGain => 0,
    };

    let protein = base.protein.saturating_add(bump).min(PROTEIN_CAP_PCT);
    let carbs = base.carbs.saturating_sub(bump).max(CARBS_FLOOR_PCT);
    let mut fats = base.fats;

    let total = i16::from(protein) + i16::from(carbs) + i16::from(fats);
    if total != 100 {
        let absorbed = (i16::from(fats) + (100 - total)).max(i16::from(FAT_FLOOR_PCT));
        // Safe: floored at 20 and at most 100 + fats
        fats = absorbed.min(i16::from(u8::MAX)) as u8;
    }

    SplitPercent::new(protein, carbs, fats)
}

/// Derive grams and calories for a split anchored on the protein target
///
/// Formula:
/// - `total_kcal` = `target_g` x 4 / (protein% / 100)
/// - `carbs_g` = `total_kcal` x carbs% / 100 / 4
/// - `fats_g` = `total_kcal` x fat% / 100 / 9
///
/// Gram amounts are rounded to multiples of 5, calories to a whole number.
/// `split.protein` must be non-zero; every archetype split satisfies this.
#[must_use]
pub fn calculate_macros(split: SplitPercent, target_g: u32) -> MacroSplit {
    let target = f64::from(target_g);
    let total_kcal = target * KCAL_PER_GRAM_PROTEIN / (f64::from(split.protein) / 100.0);
    let carbs_g = total_kcal * (f64::from(split.carbs) / 100.0) / KCAL_PER_GRAM_CARBS;
    let fats_g = total_kcal * (f64::from(split.fats) / 100.0) / KCAL_PER_GRAM_FAT;

    MacroSplit {
        protein_g: round_to_step_of_five(target),
        carbs_g: round_to_step_of_five(carbs_g),
        fats_g: round_to_step_of_five(fats_g),
        split_percent: split,
        calories: round_to_whole(total_kcal),
    }
}

/// Build one plan per archetype, in table order
#[must_use]
pub fn generate_meal_plans(target_g: u32, goal: Goal) -> Vec<MealPlan> {
    ARCHETYPES
        .iter()
        .map(|archetype| {
            let split = adjust_split(archetype.base_split, goal);
            if split.total() != 100 {
                debug!(
                    archetype = archetype.name,
                    total = split.total(),
                    "Adjusted macro split does not total 100"
                );
            }

            MealPlan {
                name: archetype.name.to_owned(),
                tagline: archetype.tagline.to_owned(),
                macros: calculate_macros(split, target_g),
                sample_meals: sample_meals(archetype.name)
                    .iter()
                    .map(|&meal| meal.to_owned())
                    .collect(),
            }
        })
        .collect()
}
