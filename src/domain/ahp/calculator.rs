//! AHP Calculator - weights and consistency for a set of criteria.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::consistency::{ConsistencyResult, CONSISTENCY_THRESHOLD};
use super::random_index::{self, RandomIndexPolicy};
use super::weights::{self, WeightMethod};
use super::{AhpError, PairwiseMatrix};
use crate::domain::foundation::{NameList, ValidationError};

/// Minimum number of criteria in a comparison.
pub const MIN_CRITERIA: usize = 2;

/// Tunables for [`AhpCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AhpSettings {
    pub random_index_policy: RandomIndexPolicy,
    pub weight_method: WeightMethod,
    pub consistency_threshold: f64,
}

impl Default for AhpSettings {
    fn default() -> Self {
        Self {
            random_index_policy: RandomIndexPolicy::Reject,
            weight_method: WeightMethod::Approximate,
            consistency_threshold: CONSISTENCY_THRESHOLD,
        }
    }
}

/// One criterion's share of the total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDetail {
    pub criterion: String,
    pub weight: f64,
    pub percentage: f64,
    /// 1-based position by descending weight.
    pub rank: usize,
}

/// Result of a successful AHP calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct AhpOutcome {
    pub criteria: NameList,
    /// Index-aligned with `criteria`; sums to 1.
    pub weights: Vec<f64>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub consistency: ConsistencyResult,
}

impl AhpOutcome {
    /// Returns criteria sorted by descending weight.
    ///
    /// Ties keep the submitted criterion order.
    pub fn weight_details(&self) -> Vec<WeightDetail> {
        let mut order: Vec<usize> = (0..self.weights.len()).collect();
        order.sort_by(|a, b| {
            self.weights[*b]
                .partial_cmp(&self.weights[*a])
                .unwrap_or(Ordering::Equal)
        });

        order
            .into_iter()
            .enumerate()
            .map(|(position, index)| WeightDetail {
                criterion: self.criteria.as_slice()[index].clone(),
                weight: self.weights[index],
                percentage: self.weights[index] * 100.0,
                rank: position + 1,
            })
            .collect()
    }

    /// Returns the weight of a named criterion.
    pub fn weight_of(&self, criterion: &str) -> Option<f64> {
        self.criteria
            .position(criterion)
            .map(|index| self.weights[index])
    }
}

/// Stateless calculator applying the AHP eigenvector approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AhpCalculator {
    settings: AhpSettings,
}

impl AhpCalculator {
    pub fn new(settings: AhpSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AhpSettings {
        &self.settings
    }

    /// Validates raw input and runs the calculation.
    ///
    /// `rows` may contain `None` for unspecified judgments; only the upper
    /// triangle contributes to the result.
    pub fn calculate(
        &self,
        criteria: Vec<String>,
        rows: &[Vec<Option<f64>>],
    ) -> Result<AhpOutcome, AhpError> {
        let criteria = NameList::try_new("criteria", criteria, MIN_CRITERIA)?;
        let matrix = PairwiseMatrix::from_rows(rows)?;
        self.calculate_matrix(criteria, &matrix)
    }

    /// Runs the calculation on an already-built matrix.
    ///
    /// # Errors
    /// - `Validation` if the matrix size differs from the criteria count
    /// - `UnsupportedSize` if no random index applies under the policy
    pub fn calculate_matrix(
        &self,
        criteria: NameList,
        matrix: &PairwiseMatrix,
    ) -> Result<AhpOutcome, AhpError> {
        if matrix.size() != criteria.len() {
            return Err(ValidationError::length_mismatch(
                "pairwise_matrix",
                criteria.len(),
                matrix.size(),
            )
            .into());
        }

        let random_index = random_index::resolve(matrix.size(), self.settings.random_index_policy)?;
        let derived = weights::derive(matrix, self.settings.weight_method);
        let consistency = ConsistencyResult::compute(
            matrix,
            &derived.weights,
            random_index,
            self.settings.consistency_threshold,
        );

        Ok(AhpOutcome {
            criteria,
            weights: derived.weights,
            normalized_matrix: derived.normalized_matrix,
            consistency,
        })
    }
}
