//! Data transfer objects for the SAW endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CalculateSawCommand, CalculateSawResult};
use crate::domain::saw::{AlternativeBreakdown, RankedAlternative, ScoredAlternative};

/// Request to rank alternatives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateSawRequest {
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub criteria: Vec<String>,
    /// One weight per criterion, summing to 1
    #[serde(default)]
    pub weights: Vec<f64>,
    /// Rows are alternatives, columns are criteria
    #[serde(default)]
    pub decision_matrix: Vec<Vec<f64>>,
    /// `benefit` or `cost` per criterion
    #[serde(default)]
    pub criteria_types: Vec<String>,
}

impl From<CalculateSawRequest> for CalculateSawCommand {
    fn from(request: CalculateSawRequest) -> Self {
        CalculateSawCommand {
            alternatives: request.alternatives,
            criteria: request.criteria,
            weights: request.weights,
            decision_matrix: request.decision_matrix,
            criteria_types: request.criteria_types,
        }
    }
}

/// Successful SAW response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateSawResponse {
    pub success: bool,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub criteria_types: Vec<String>,
    pub weights: Vec<f64>,
    pub decision_matrix: Vec<Vec<f64>>,
    pub normalized_matrix: Vec<Vec<f64>>,
    /// Index-aligned with `alternatives`
    pub scores: Vec<f64>,
    pub ranking: Vec<RankedAlternative>,
    pub detailed_scores: Vec<AlternativeBreakdown>,
    pub best_alternative: Option<ScoredAlternative>,
    pub worst_alternative: Option<ScoredAlternative>,
}

impl From<CalculateSawResult> for CalculateSawResponse {
    fn from(outcome: CalculateSawResult) -> Self {
        let ranking = outcome.ranking();
        let detailed_scores = outcome.detailed_scores();
        let best_alternative = outcome.best();
        let worst_alternative = outcome.worst();

        Self {
            success: true,
            criteria_types: outcome.kinds.iter().map(|k| k.label().to_string()).collect(),
            alternatives: outcome.alternatives.into_inner(),
            criteria: outcome.criteria.into_inner(),
            weights: outcome.weights,
            decision_matrix: outcome.decision_matrix.rows().to_vec(),
            normalized_matrix: outcome.normalized_matrix,
            scores: outcome.scores,
            ranking,
            detailed_scores,
            best_alternative,
            worst_alternative,
        }
    }
}
