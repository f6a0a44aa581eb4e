//! HTTP handlers for the AHP endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::adapters::http::envelope::CalculationApiError;
use crate::application::handlers::CalculateAhpHandler;
use crate::domain::ahp::AhpError;

use super::dto::{CalculateAhpRequest, CalculateAhpResponse};

/// Application state for the AHP endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct AhpAppState {
    pub handler: CalculateAhpHandler,
}

impl AhpAppState {
    pub fn new(handler: CalculateAhpHandler) -> Self {
        Self { handler }
    }
}

impl From<AhpError> for CalculationApiError {
    fn from(error: AhpError) -> Self {
        CalculationApiError::rejected(error.code(), error.to_string())
    }
}

/// POST /calculate_ahp
///
/// Derives criterion weights and the consistency verdict.
pub async fn calculate_ahp(
    State(state): State<AhpAppState>,
    payload: Result<Json<CalculateAhpRequest>, JsonRejection>,
) -> Result<Json<CalculateAhpResponse>, CalculationApiError> {
    let Json(request) = payload?;
    let outcome = state.handler.handle(request.into())?;
    Ok(Json(outcome.into()))
}
