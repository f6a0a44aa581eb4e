//! SAW Module - Simple Additive Weighting over a decision matrix.
//!
//! Ranks alternatives by the weighted sum of their normalized criterion
//! values. Weights usually come from an AHP calculation over the same
//! criteria.
//!
//! # Components
//!
//! - `CriterionKind` - Benefit (higher is better) or cost (lower is better)
//! - `DecisionMatrix` - Validated alternatives × criteria values and normalization
//! - `SawCalculator` - Validation, scoring, ranking and score breakdowns

mod calculator;
mod criterion_kind;
mod decision_matrix;
mod errors;

pub use calculator::{
    AlternativeBreakdown, AlternativeComparison, CriterionContribution, RankedAlternative,
    SawCalculator, SawInput, SawOutcome, ScoredAlternative, WEIGHT_SUM_TOLERANCE,
};
pub use criterion_kind::CriterionKind;
pub use decision_matrix::{normalize_benefit, normalize_cost, DecisionMatrix};
pub use errors::SawError;
