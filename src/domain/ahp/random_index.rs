//! Saaty's random consistency index table.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// Random index by matrix size; position `i` holds RI(i + 1).
pub const RANDOM_INDEX_TABLE: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Largest matrix size covered by [`RANDOM_INDEX_TABLE`].
pub const MAX_TABULATED_SIZE: usize = RANDOM_INDEX_TABLE.len();

/// What to do when a matrix is larger than the tabulated sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomIndexPolicy {
    /// Fail with [`AhpError::UnsupportedSize`].
    #[default]
    Reject,
    /// Use the largest tabulated value.
    UseLargest,
}

/// Returns the tabulated RI for `size`, if any.
pub fn lookup(size: usize) -> Option<f64> {
    size.checked_sub(1)
        .and_then(|index| RANDOM_INDEX_TABLE.get(index))
        .copied()
}

/// Resolves the RI for `size` under `policy`.
pub fn resolve(size: usize, policy: RandomIndexPolicy) -> Result<f64, AhpError> {
    match (lookup(size), policy) {
        (Some(ri), _) => Ok(ri),
        (None, RandomIndexPolicy::UseLargest) => Ok(RANDOM_INDEX_TABLE[MAX_TABULATED_SIZE - 1]),
        (None, RandomIndexPolicy::Reject) => Err(AhpError::UnsupportedSize {
            size,
            max: MAX_TABULATED_SIZE,
        }),
    }
}
