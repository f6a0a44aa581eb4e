//! AHP Module - Analytic Hierarchy Process weighting.
//!
//! Derives priority weights for a set of criteria from a reciprocal pairwise
//! comparison matrix and measures how consistent the judgments are.
//!
//! # Components
//!
//! - `PairwiseMatrix` - Reciprocal judgments, rebuilt from the upper triangle
//! - `weights` - Column-normalize/row-average approximation (power iteration for large n)
//! - `ConsistencyResult` - λmax, consistency index and ratio
//! - `random_index` - Saaty's random index table and out-of-table policy
//! - `AhpCalculator` - Validation and orchestration of a full calculation
//!
//! All functions are pure. A calculation owns its input and returns a new
//! outcome, so concurrent requests need no coordination.

mod calculator;
mod consistency;
mod errors;
mod pairwise_matrix;
pub mod random_index;
pub mod weights;

pub use calculator::{AhpCalculator, AhpOutcome, AhpSettings, WeightDetail, MIN_CRITERIA};
pub use consistency::{ConsistencyResult, CONSISTENCY_THRESHOLD};
pub use errors::AhpError;
pub use pairwise_matrix::{PairwiseMatrix, PairwiseMatrixBuilder, DEFAULT_JUDGMENT};
pub use random_index::RandomIndexPolicy;
pub use weights::WeightMethod;
