// ABOUTME: Intake request models for protein recommendations
// ABOUTME: ProteinRequest wire type, IntakeRequest validated value, and the input enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit the client reported body weight in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    #[serde(rename = "kg", alias = "kilogram")]
    Kilogram,
    /// Pounds
    #[serde(rename = "lb", alias = "pound")]
    Pound,
}

/// Typical training volume and intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little structured training
    Low,
    /// Regular training a few days per week
    #[default]
    Moderate,
    /// Hard training most days
    High,
}

impl ActivityLevel {
    /// Every activity level, in table order
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];
}

/// Primary body composition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit, preserve lean mass
    FatLoss,
    /// Hold current body composition
    #[default]
    Maintenance,
    /// Caloric surplus, build lean mass
    MuscleGain,
}

impl Goal {
    /// Every goal, in table order
    pub const ALL: [Self; 3] = [Self::FatLoss, Self::Maintenance, Self::MuscleGain];
}

/// Self-reported sex (accepted, not used by the calculation)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FatLoss => write!(f, "fat_loss"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::MuscleGain => write!(f, "muscle_gain"),
        }
    }
}

/// `POST /api/protein` request body as received from the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinRequest {
    /// Body weight value, in `unit`
    pub weight: f64,
    /// Unit of `weight`
    #[serde(default)]
    pub unit: WeightUnit,
    /// Typical training volume/intensity
    #[serde(default)]
    pub activity: ActivityLevel,
    /// Primary goal
    #[serde(default)]
    pub goal: Goal,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    /// Self-reported sex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
}

/// Check a raw weight against the accepted bounds, in its own unit.
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` on the `weight` field when the value is not
/// finite, not positive, or above the sanity cap.
pub fn validate_weight(weight: f64) -> AppResult<f64> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AppError::out_of_range(
            "weight",
            "Weight must be greater than 0",
        ));
    }
    if weight > limits::MAX_WEIGHT {
        return Err(AppError::out_of_range(
            "weight",
            "Weight value seems unrealistic",
        )
        .with_details(serde_json::json!({ "max": limits::MAX_WEIGHT })));
    }
    Ok(weight)
}

/// A validated intake request. Only obtainable through validation, so the
/// calculation engine can treat every instance as in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeRequest {
    weight: f64,
    unit: WeightUnit,
    activity: ActivityLevel,
    goal: Goal,
    age: Option<u8>,
    sex: Option<Sex>,
}

impl IntakeRequest {
    /// Build a validated request without the optional demographics
    ///
    /// # Errors
    ///
    /// Returns a validation error when `weight` is out of range
    pub fn new(weight: f64, unit: WeightUnit, activity: ActivityLevel, goal: Goal) -> AppResult<Self> {
        Ok(Self {
            weight: validate_weight(weight)?,
            unit,
            activity,
            goal,
            age: None,
            sex: None,
        })
    }

    /// Weight in the unit the client used
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Unit the client used
    #[must_use]
    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Activity level
    #[must_use]
    pub const fn activity(&self) -> ActivityLevel {
        self.activity
    }

    /// Goal
    #[must_use]
    pub const fn goal(&self) -> Goal {
        self.goal
    }

    /// Age, when supplied
    #[must_use]
    pub const fn age(&self) -> Option<u8> {
        self.age
    }

    /// Sex, when supplied
    #[must_use]
    pub const fn sex(&self) -> Option<Sex> {
        self.sex
    }
}

impl TryFrom<ProteinRequest> for IntakeRequest {
    type Error = AppError;

    fn try_from(request: ProteinRequest) -> AppResult<Self> {
        let mut intake = Self::new(request.weight, request.unit, request.activity, request.goal)?;

        if let Some(age) = request.age {
            if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&age) {
                return Err(AppError::out_of_range(
                    "age",
                    format!(
                        "Age must be between {} and {}",
                        limits::MIN_AGE,
                        limits::MAX_AGE
                    ),
                ));
            }
            // Safe: bounded to 10..=100 above
            intake.age = Some(age as u8);
        }
        intake.sex = request.sex;

        Ok(intake)
    }
}
