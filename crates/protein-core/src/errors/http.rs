// ABOUTME: axum integration for AppError (IntoResponse and JSON extractor rejections)
// ABOUTME: Keeps every failure on the same JSON error body regardless of where it was raised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::warn;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every code maps to a 4xx status
        let status = StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::BAD_REQUEST);

        warn!(code = ?self.code, field = ?self.context.field, "{}", self.message);

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => {
                let reason = text
                    .split_once("target type: ")
                    .map_or(text.as_str(), |(_, rest)| rest)
                    .to_owned();
                match rejected_field(&reason) {
                    Some(field) if reason.contains("missing field") => Self::missing_field(&field),
                    Some(field) => Self::new(ErrorCode::InvalidInput, reason).with_field(field),
                    None => Self::new(ErrorCode::InvalidInput, reason),
                }
            }
            JsonRejection::MissingJsonContentType(_) => {
                Self::invalid_format("Expected request with `Content-Type: application/json`")
            }
            _ => Self::invalid_format(text),
        }
    }
}

/// Pull the offending field name out of a serde deserialization message.
///
/// Handles both `missing field `weight`` and the `path: message` form
/// produced for type and enum mismatches.
pub(super) fn rejected_field(reason: &str) -> Option<String> {
    if let Some((_, rest)) = reason.split_once("missing field `") {
        return rest.split_once('`').map(|(name, _)| name.to_owned());
    }

    let (path, _) = reason.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '[' || c == ']');
    is_path.then(|| path.to_owned())
}
