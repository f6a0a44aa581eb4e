//! Priority weight derivation from a pairwise matrix.

use serde::{Deserialize, Serialize};

use super::PairwiseMatrix;

/// Largest size for which the column-average approximation is always used.
pub const APPROXIMATION_MAX_SIZE: usize = 9;

const POWER_ITERATION_TOLERANCE: f64 = 1e-12;
const POWER_ITERATION_MAX_STEPS: usize = 1_000;

/// How priority weights are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMethod {
    /// Column-normalize, then average each row.
    #[default]
    Approximate,
    /// Principal eigenvector by power iteration for matrices larger than
    /// [`APPROXIMATION_MAX_SIZE`]; smaller matrices use the approximation.
    Eigenvector,
}

/// Weights together with the column-normalized matrix they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedWeights {
    pub weights: Vec<f64>,
    pub normalized_matrix: Vec<Vec<f64>>,
}

/// Derives priority weights for `matrix` using `method`.
pub fn derive(matrix: &PairwiseMatrix, method: WeightMethod) -> DerivedWeights {
    let normalized_matrix = normalize_columns(matrix);
    let approximate = row_averages(&normalized_matrix);

    let weights = match method {
        WeightMethod::Eigenvector if matrix.size() > APPROXIMATION_MAX_SIZE => {
            principal_eigenvector(matrix, &approximate).unwrap_or(approximate)
        }
        _ => approximate,
    };

    DerivedWeights {
        weights,
        normalized_matrix,
    }
}

/// Divides every entry by its column sum so each column sums to 1.
pub fn normalize_columns(matrix: &PairwiseMatrix) -> Vec<Vec<f64>> {
    let sums = matrix.column_sums();
    matrix
        .rows()
        .map(|row| row.iter().zip(&sums).map(|(v, s)| v / s).collect())
        .collect()
}

/// Mean of each row.
pub fn row_averages(rows: &[Vec<f64>]) -> Vec<f64> {
    rows.iter()
        .map(|row| row.iter().sum::<f64>() / row.len() as f64)
        .collect()
}

/// Power iteration seeded with `start`.
///
/// Returns `None` if the iteration does not settle within the step budget.
fn principal_eigenvector(matrix: &PairwiseMatrix, start: &[f64]) -> Option<Vec<f64>> {
    let mut current = start.to_vec();

    for _ in 0..POWER_ITERATION_MAX_STEPS {
        let mut next = matrix.multiply(&current);
        let total: f64 = next.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        next.iter_mut().for_each(|v| *v /= total);

        let delta = next
            .iter()
            .zip(&current)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        current = next;

        if delta < POWER_ITERATION_TOLERANCE {
            return Some(current);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_matrix() -> PairwiseMatrix {
        PairwiseMatrix::builder(3)
            .judgment(0, 1, 3.0)
            .judgment(0, 2, 5.0)
            .judgment(1, 2, 2.0)
            .build()
            .unwrap()
    }

    /// A perfectly consistent matrix built from known weights.
    fn consistent_matrix(weights: &[f64]) -> PairwiseMatrix {
        let mut builder = PairwiseMatrix::builder(weights.len());
        for i in 0..weights.len() {
            for j in (i + 1)..weights.len() {
                builder = builder.judgment(i, j, weights[i] / weights[j]);
            }
        }
        builder.build().unwrap()
    }

    #[test]
    fn normalized_columns_sum_to_one() {
        let normalized = normalize_columns(&textbook_matrix());
        for col in 0..3 {
            let sum: f64 = normalized.iter().map(|row| row[col]).sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn approximation_matches_textbook_vector() {
        let derived = derive(&textbook_matrix(), WeightMethod::Approximate);
        let w = &derived.weights;

        // Column sums: 1.5333.., 4.5, 8.0
        let expected_a = (1.0 / (23.0 / 15.0) + 3.0 / 4.5 + 5.0 / 8.0) / 3.0;
        let expected_b = ((1.0 / 3.0) / (23.0 / 15.0) + 1.0 / 4.5 + 2.0 / 8.0) / 3.0;
        let expected_c = (0.2 / (23.0 / 15.0) + 0.5 / 4.5 + 1.0 / 8.0) / 3.0;

        assert!((w[0] - expected_a).abs() < 1e-9);
        assert!((w[1] - expected_b).abs() < 1e-9);
        assert!((w[2] - expected_c).abs() < 1e-9);
        assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn eigenvector_method_is_ignored_for_small_matrices() {
        let m = textbook_matrix();
        assert_eq!(
            derive(&m, WeightMethod::Approximate),
            derive(&m, WeightMethod::Eigenvector)
        );
    }

    #[test]
    fn eigenvector_method_recovers_consistent_weights_for_large_matrix() {
        let raw: Vec<f64> = (1..=12).map(|i| i as f64).collect();
        let total: f64 = raw.iter().sum();
        let expected: Vec<f64> = raw.iter().map(|w| w / total).collect();

        let derived = derive(&consistent_matrix(&raw), WeightMethod::Eigenvector);
        for (w, e) in derived.weights.iter().zip(&expected) {
            assert!((w - e).abs() < 1e-9);
        }
    }

    #[test]
    fn eigenvector_method_sums_to_one_for_inconsistent_large_matrix() {
        let mut builder = PairwiseMatrix::builder(11);
        for i in 0..11 {
            for j in (i + 1)..11 {
                let value = if (i + j) % 3 == 0 { 1.0 / 3.0 } else { 2.0 };
                builder = builder.judgment(i, j, value);
            }
        }
        let derived = derive(&builder.build().unwrap(), WeightMethod::Eigenvector);

        assert!((derived.weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(derived.weights.iter().all(|w| *w > 0.0));
    }

    #[test]
    fn method_deserializes_from_snake_case() {
        let method: WeightMethod = serde_json::from_str(r#""eigenvector""#).unwrap();
        assert_eq!(method, WeightMethod::Eigenvector);
    }
}
