//! HTTP handlers for the SAW endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::adapters::http::envelope::CalculationApiError;
use crate::application::handlers::CalculateSawHandler;
use crate::domain::saw::SawError;

use super::dto::{CalculateSawRequest, CalculateSawResponse};

/// Application state for the SAW endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct SawAppState {
    pub handler: CalculateSawHandler,
}

impl From<SawError> for CalculationApiError {
    fn from(error: SawError) -> Self {
        CalculationApiError::rejected(error.code(), error.to_string())
    }
}

/// POST /calculate_saw
///
/// Scores and ranks alternatives by Simple Additive Weighting.
pub async fn calculate_saw(
    State(state): State<SawAppState>,
    payload: Result<Json<CalculateSawRequest>, JsonRejection>,
) -> Result<Json<CalculateSawResponse>, CalculationApiError> {
    let Json(request) = payload?;
    let outcome = state.handler.handle(request.into())?;
    Ok(Json(outcome.into()))
}
