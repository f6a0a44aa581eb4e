//! Consistency analysis - λmax, CI and CR for a set of weights.

use serde::{Deserialize, Serialize};

use super::PairwiseMatrix;

/// Conventional acceptance threshold for the consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Consistency figures for one pairwise matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// Principal eigenvalue estimate.
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
}

impl ConsistencyResult {
    /// Computes consistency of `weights` against `matrix`.
    ///
    /// `random_index` is RI(n) for the matrix size. Ratios at or above
    /// `threshold` are inconsistent.
    ///
    /// # Edge Cases
    /// - n ≤ 1: CI is 0
    /// - RI = 0 (n ≤ 2): CR is 0, always consistent
    pub fn compute(
        matrix: &PairwiseMatrix,
        weights: &[f64],
        random_index: f64,
        threshold: f64,
    ) -> Self {
        let lambda_max = lambda_max(matrix, weights);
        let consistency_index = consistency_index(lambda_max, matrix.size());
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        Self {
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
            is_consistent: consistency_ratio < threshold,
        }
    }
}

/// Mean of `(M·w)[i] / w[i]`.
pub fn lambda_max(matrix: &PairwiseMatrix, weights: &[f64]) -> f64 {
    if weights.is_empty() {
        return 0.0;
    }
    let weighted_sum = matrix.multiply(weights);
    let total: f64 = weighted_sum
        .iter()
        .zip(weights)
        .map(|(ws, w)| ws / w)
        .sum();
    total / weights.len() as f64
}

/// `(λmax − n) / (n − 1)`, or 0 when n ≤ 1.
pub fn consistency_index(lambda_max: f64, size: usize) -> f64 {
    if size <= 1 {
        return 0.0;
    }
    let n = size as f64;
    (lambda_max - n) / (n - 1.0)
}
