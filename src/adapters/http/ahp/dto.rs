//! Data transfer objects for the AHP endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CalculateAhpCommand, CalculateAhpResult};
use crate::domain::ahp::WeightDetail;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to derive criterion weights.
///
/// Missing fields default to empty so they are reported as calculation
/// failures rather than decoding errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateAhpRequest {
    /// Criterion names in matrix order
    #[serde(default)]
    pub criteria: Vec<String>,
    /// n×n judgments; `null` means "not compared"
    #[serde(default)]
    pub pairwise_matrix: Vec<Vec<Option<f64>>>,
}

impl From<CalculateAhpRequest> for CalculateAhpCommand {
    fn from(request: CalculateAhpRequest) -> Self {
        CalculateAhpCommand {
            criteria: request.criteria,
            pairwise_matrix: request.pairwise_matrix,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Successful AHP response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateAhpResponse {
    /// Always true
    pub success: bool,
    pub criteria: Vec<String>,
    /// Index-aligned with `criteria`
    pub weights: Vec<f64>,
    /// Criteria sorted by descending weight
    pub weight_details: Vec<WeightDetail>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub consistency_ratio: f64,
    pub consistency_index: f64,
    pub lambda_max: f64,
    pub random_index: f64,
    pub is_consistent: bool,
}

impl From<CalculateAhpResult> for CalculateAhpResponse {
    fn from(outcome: CalculateAhpResult) -> Self {
        let weight_details = outcome.weight_details();
        let consistency = outcome.consistency;
        Self {
            success: true,
            criteria: outcome.criteria.into_inner(),
            weights: outcome.weights,
            weight_details,
            normalized_matrix: outcome.normalized_matrix,
            consistency_ratio: consistency.consistency_ratio,
            consistency_index: consistency.consistency_index,
            lambda_max: consistency.lambda_max,
            random_index: consistency.random_index,
            is_consistent: consistency.is_consistent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::CalculateAhpHandler;

    #[test]
    fn request_accepts_null_judgments() {
        let json = r#"{"criteria":["A","B"],"pairwise_matrix":[[1,null],[null,1]]}"#;
        let request: CalculateAhpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pairwise_matrix[0][1], None);
        assert_eq!(request.pairwise_matrix[1][1], Some(1.0));
    }

    #[test]
    fn request_defaults_missing_fields() {
        let request: CalculateAhpRequest = serde_json::from_str("{}").unwrap();
        assert!(request.criteria.is_empty());
        assert!(request.pairwise_matrix.is_empty());
    }

    #[test]
    fn response_carries_outcome_fields() {
        let request = CalculateAhpRequest {
            criteria: vec!["A".to_string(), "B".to_string()],
            pairwise_matrix: vec![vec![Some(1.0), Some(1.0)], vec![Some(1.0), Some(1.0)]],
        };
        let outcome = CalculateAhpHandler::default().handle(request.into()).unwrap();
        let response = CalculateAhpResponse::from(outcome);

        assert!(response.success);
        assert_eq!(response.criteria, vec!["A", "B"]);
        assert_eq!(response.weights, vec![0.5, 0.5]);
        assert_eq!(response.consistency_ratio, 0.0);
        assert!(response.is_consistent);
        assert_eq!(response.weight_details.len(), 2);
    }
}
