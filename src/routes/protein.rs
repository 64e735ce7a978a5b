// ABOUTME: Protein calculation route handlers
// ABOUTME: Validates intake requests and returns daily protein targets with themed meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Protein calculation routes
//!
//! `POST /api/protein` accepts a body weight plus activity and goal, and
//! returns the recommended g/kg range, daily gram targets, and four macro
//! meal plans. Every failure is rendered through `AppError` so clients see
//! one error body shape.

use crate::logging::AppLogger;
use crate::middleware::RequestId;
use axum::{
    extract::rejection::JsonRejection, routing::post, Extension, Json, Router,
};
use protein_core::constants::endpoints;
use protein_core::errors::{AppError, AppResult};
use protein_core::models::{IntakeRequest, ProteinPlan, ProteinRequest};
use protein_intelligence::calculate_protein_plan;
use tracing::info;

/// Protein routes implementation
pub struct ProteinRoutes;

impl ProteinRoutes {
    /// Create all protein calculation routes
    pub fn routes() -> Router {
        Router::new().route(endpoints::PROTEIN, post(Self::handle_calculate))
    }

    /// Handle `POST /api/protein`
    async fn handle_calculate(
        request_id: Option<Extension<RequestId>>,
        body: Result<Json<ProteinRequest>, JsonRejection>,
    ) -> AppResult<Json<ProteinPlan>> {
        let request_id = request_id.map(|Extension(id)| id);
        let tag = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.as_str()),
            None => error,
        };

        let Json(raw) = body.map_err(|rejection| tag(AppError::from(rejection)))?;
        let intake = IntakeRequest::try_from(raw).map_err(tag)?;

        info!(
            weight = intake.weight(),
            unit = ?intake.unit(),
            activity = %intake.activity(),
            goal = %intake.goal(),
            "Calculating protein plan"
        );

        let plan = calculate_protein_plan(&intake).map_err(tag)?;
        AppLogger::log_protein_calculation(
            intake.activity(),
            intake.goal(),
            plan.weight_kg,
            plan.daily_grams_target,
        );

        Ok(Json(plan))
    }
}
