// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion, intake bounds, protein dosing tables, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Unit conversion and measurement constants
pub mod units {
    /// Kilograms per international avoirdupois pound
    pub const KG_PER_POUND: f64 = 0.453_592_37;
    /// kcal per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Gram amounts in meal plans are reported in steps of this size
    pub const MACRO_GRAM_STEP: f64 = 5.0;
}

/// Request validation limits
pub mod limits {
    /// Upper sanity bound on weight, in the request's own unit
    pub const MAX_WEIGHT: f64 = 1000.0;
    /// Youngest accepted age
    pub const MIN_AGE: i64 = 10;
    /// Oldest accepted age
    pub const MAX_AGE: i64 = 100;
}

/// Protein dosing in grams per kilogram of body weight per day
pub mod protein {
    /// Hard floor applied after rounding
    pub const FLOOR_G_PER_KG: f64 = 1.2;
    /// Hard ceiling applied after rounding
    pub const CEILING_G_PER_KG: f64 = 2.7;

    /// Low activity base range
    pub const LOW_ACTIVITY_RANGE: (f64, f64) = (1.2, 1.6);
    /// Moderate activity base range
    pub const MODERATE_ACTIVITY_RANGE: (f64, f64) = (1.6, 2.0);
    /// High activity base range
    pub const HIGH_ACTIVITY_RANGE: (f64, f64) = (1.8, 2.2);

    /// Added to both bounds for fat loss
    pub const FAT_LOSS_ADJUSTMENT: f64 = 0.2;
    /// Added to both bounds for muscle gain
    pub const MUSCLE_GAIN_ADJUSTMENT: f64 = 0.1;
}

/// Macro split adjustment bounds for meal plans (percent of calories)
pub mod macro_split {
    /// Protein points moved from carbs into protein when cutting
    pub const FAT_LOSS_PROTEIN_BUMP: u8 = 5;
    /// Protein share never exceeds this
    pub const PROTEIN_CAP_PCT: u8 = 45;
    /// Carbohydrate share never drops below this
    pub const CARBS_FLOOR_PCT: u8 = 30;
    /// Fat share never drops below this when absorbing a remainder
    pub const FAT_FLOOR_PCT: u8 = 20;
}

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP service
    pub const PROTEIN_API: &str = "protein-api";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Protein calculation endpoint
    pub const PROTEIN: &str = "/api/protein";
    /// Static greeting endpoint
    pub const HELLO: &str = "/api/hello";
    /// Environment diagnostic endpoint
    pub const DIAGNOSTICS: &str = "/test";
}

/// Server defaults
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Default per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Header carrying the request correlation ID
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}
