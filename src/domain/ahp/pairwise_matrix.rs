//! Pairwise comparison matrix - reciprocal judgments between criteria.

use serde::{Serialize, Serializer};

use crate::domain::foundation::ValidationError;

/// Judgment used when a pair has not been compared.
pub const DEFAULT_JUDGMENT: f64 = 1.0;

const FIELD: &str = "pairwise_matrix";

/// A reciprocal n×n matrix of positive judgments.
///
/// Invariants: `m[i][i] == 1` and `m[j][i] == 1 / m[i][j]`. Both are
/// established at construction from the upper triangle, so a caller cannot
/// produce a non-reciprocal instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    size: usize,
    /// Row-major entries.
    entries: Vec<f64>,
}

impl PairwiseMatrix {
    /// Creates the all-indifferent matrix of the given size.
    pub fn indifferent(size: usize) -> Self {
        Self {
            size,
            entries: vec![DEFAULT_JUDGMENT; size * size],
        }
    }

    /// Creates a builder starting from the all-indifferent matrix.
    pub fn builder(size: usize) -> PairwiseMatrixBuilder {
        PairwiseMatrixBuilder::new(size)
    }

    /// Builds a matrix from submitted rows.
    ///
    /// `None` entries take [`DEFAULT_JUDGMENT`]. Every supplied entry must be
    /// finite and strictly positive, but only the upper triangle is used: the
    /// diagonal is forced to 1 and the lower triangle is recomputed as the
    /// reciprocal of its mirror.
    pub fn from_rows(rows: &[Vec<Option<f64>>]) -> Result<Self, ValidationError> {
        let size = rows.len();
        if size == 0 {
            return Err(ValidationError::empty_field(FIELD));
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ValidationError::NotSquare {
                    row: row_index,
                    expected: size,
                    actual: row.len(),
                });
            }
            for (col_index, entry) in row.iter().enumerate() {
                if let Some(value) = entry {
                    check_judgment(row_index, col_index, *value)?;
                }
            }
        }

        let mut matrix = Self::indifferent(size);
        for i in 0..size {
            for j in (i + 1)..size {
                let value = rows[i][j].unwrap_or(DEFAULT_JUDGMENT);
                matrix.set_pair(i, j, value);
            }
        }

        check_column_sums(&matrix)?;
        Ok(matrix)
    }

    /// Returns n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the judgment of row `i` over column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i * self.size + j]
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.entries[i * self.size..(i + 1) * self.size]
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.entries.chunks(self.size.max(1))
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.size];
        for row in self.rows() {
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }

    /// Matrix-vector product `M · v`.
    pub fn multiply(&self, vector: &[f64]) -> Vec<f64> {
        self.rows()
            .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum::<f64>())
            .collect()
    }

    /// Returns the matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        let n = self.size;
        self.entries[i * n + j] = value;
        self.entries[j * n + i] = 1.0 / value;
    }
}

impl Serialize for PairwiseMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

/// Builder that records individual judgments and keeps reciprocity.
#[derive(Debug)]
pub struct PairwiseMatrixBuilder {
    matrix: PairwiseMatrix,
    error: Option<ValidationError>,
}

impl PairwiseMatrixBuilder {
    /// Creates a builder for an n×n matrix.
    pub fn new(size: usize) -> Self {
        Self {
            matrix: PairwiseMatrix::indifferent(size),
            error: None,
        }
    }

    /// Records that `row` is `value` times as important as `col`.
    ///
    /// The mirrored entry is set to the reciprocal. The first invalid
    /// judgment is reported by [`build`](Self::build).
    pub fn judgment(mut self, row: usize, col: usize, value: f64) -> Self {
        if self.error.is_some() {
            return self;
        }

        let size = self.matrix.size;
        if row >= size || col >= size {
            self.error = Some(ValidationError::invalid_format(
                FIELD,
                format!("judgment ({},{}) is outside a {}x{} matrix", row, col, size, size),
            ));
        } else if row == col {
            self.error = Some(ValidationError::invalid_format(
                FIELD,
                format!("judgment ({},{}) is on the diagonal", row, col),
            ));
        } else if let Err(e) = check_judgment(row, col, value) {
            self.error = Some(e);
        } else {
            self.matrix.set_pair(row, col, value);
        }
        self
    }

    /// Builds the matrix.
    pub fn build(self) -> Result<PairwiseMatrix, ValidationError> {
        match self.error {
            Some(e) => Err(e),
            None if self.matrix.size == 0 => Err(ValidationError::empty_field(FIELD)),
            None => check_column_sums(&self.matrix).map(|_| self.matrix),
        }
    }
}

fn check_judgment(row: usize, col: usize, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { row, col });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { row, col, value });
    }
    let reciprocal = 1.0 / value;
    if !reciprocal.is_finite() || reciprocal == 0.0 {
        return Err(ValidationError::NoReciprocal { row, col, value });
    }
    Ok(())
}

/// Column sums must stay finite for normalization to be defined.
fn check_column_sums(matrix: &PairwiseMatrix) -> Result<(), ValidationError> {
    match matrix.column_sums().iter().position(|sum| !sum.is_finite()) {
        Some(col) => Err(ValidationError::invalid_format(
            FIELD,
            format!("judgments in column {} are too large to normalize", col),
        )),
        None => Ok(()),
    }
}
