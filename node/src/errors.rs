// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use veridraw_kernel::error::DrawError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Kernel error: {0:?}")]
    Kernel(DrawError),
    #[error("No beacon pulse published for this instant")]
    PulseNotFound,
    #[error("Beacon unavailable: {0}")]
    Upstream(String),
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            EngineError::Kernel(k_err) => match k_err {
                DrawError::InvalidFormat => (
                    StatusCode::BAD_REQUEST,
                    "Invalid date or time format (expected YYYY-MM-DD and HH:MM)".to_string(),
                ),
                DrawError::InvalidRange => (
                    StatusCode::BAD_REQUEST,
                    "Participant count must be a positive integer".to_string(),
                ),
                DrawError::InvalidInstant => (
                    StatusCode::BAD_REQUEST,
                    "Date and time do not denote a real instant".to_string(),
                ),
                DrawError::InvalidDigest => (
                    StatusCode::BAD_REQUEST,
                    "Digest must be exactly 128 hex characters".to_string(),
                ),
                DrawError::Overflow => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Numeric overflow".to_string())
                }
            },
            EngineError::PulseNotFound => (
                StatusCode::NOT_FOUND,
                "No beacon pulse published for this instant".to_string(),
            ),
            EngineError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<DrawError> for EngineError {
    fn from(e: DrawError) -> Self {
        EngineError::Kernel(e)
    }
}
