//! Decision matrix - raw performance of each alternative on each criterion.

use serde::Serialize;

use super::CriterionKind;
use crate::domain::foundation::ValidationError;

const FIELD: &str = "decision_matrix";

/// Alternatives × criteria grid of non-negative values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Validates shape and values.
    ///
    /// # Errors
    /// - `LengthMismatch` if the row count or any row length is wrong
    /// - `NotFinite` / `Negative` for invalid entries
    pub fn try_new(
        rows: Vec<Vec<f64>>,
        alternatives: usize,
        criteria: usize,
    ) -> Result<Self, ValidationError> {
        if rows.len() != alternatives {
            return Err(ValidationError::length_mismatch(FIELD, alternatives, rows.len()));
        }
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != criteria {
                return Err(ValidationError::length_mismatch(
                    format!("{}[{}]", FIELD, row_index),
                    criteria,
                    row.len(),
                ));
            }
        }
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ValidationError::NotFinite {
                        row: row_index,
                        col: col_index,
                    });
                }
                if *value < 0.0 {
                    return Err(ValidationError::Negative {
                        row: row_index,
                        col: col_index,
                        value: *value,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Values of one criterion across all alternatives.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Normalizes every column according to its kind.
    ///
    /// `kinds` must have one entry per criterion.
    pub fn normalize(&self, kinds: &[CriterionKind]) -> Vec<Vec<f64>> {
        let mut normalized = vec![vec![0.0; kinds.len()]; self.rows.len()];
        for (col, kind) in kinds.iter().enumerate() {
            let column = self.column(col);
            let values = match kind {
                CriterionKind::Benefit => normalize_benefit(&column),
                CriterionKind::Cost => normalize_cost(&column),
            };
            for (row, value) in values.into_iter().enumerate() {
                normalized[row][col] = value;
            }
        }
        normalized
    }
}

/// `x / max`; an all-zero column is returned unchanged.
pub fn normalize_benefit(column: &[f64]) -> Vec<f64> {
    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 {
        return column.to_vec();
    }
    column.iter().map(|x| x / max).collect()
}

/// `min / x`; a column whose minimum is zero becomes all ones.
pub fn normalize_cost(column: &[f64]) -> Vec<f64> {
    let min = column.iter().copied().fold(f64::INFINITY, f64::min);
    if min == 0.0 {
        return vec![1.0; column.len()];
    }
    column
        .iter()
        .map(|x| if *x == 0.0 { 0.0 } else { min / x })
        .collect()
}
