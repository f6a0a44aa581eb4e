//! Failure envelope shared by the calculation endpoints.
//!
//! Calculation failures are reported in-band: HTTP 200 with
//! `{"success": false, "error": ..., "code": ...}`. This includes well-formed
//! JSON whose fields have the wrong shape. Only bodies that are not JSON at
//! all get a 400.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::ErrorCode;

/// Body returned for any failed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Always false.
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl FailureResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.to_string(),
        }
    }
}

/// Error type for calculation handlers.
#[derive(Debug)]
pub enum CalculationApiError {
    /// The calculation rejected its input.
    Rejected { code: ErrorCode, message: String },
    /// The body is not JSON.
    MalformedRequest(String),
}

impl CalculationApiError {
    pub fn rejected(code: ErrorCode, message: impl Into<String>) -> Self {
        CalculationApiError::Rejected {
            code,
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for CalculationApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(status = %rejection.status(), "Rejected request body");
        match rejection {
            JsonRejection::JsonDataError(e) => {
                CalculationApiError::rejected(ErrorCode::ValidationFailed, e.body_text())
            }
            other => CalculationApiError::MalformedRequest(other.body_text()),
        }
    }
}

impl IntoResponse for CalculationApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            CalculationApiError::Rejected { code, message } => {
                (StatusCode::OK, FailureResponse::new(code, message))
            }
            CalculationApiError::MalformedRequest(message) => (
                StatusCode::BAD_REQUEST,
                FailureResponse::new(ErrorCode::MalformedRequest, message),
            ),
        };
        (status, Json(body)).into_response()
    }
}
