//! SAW calculation errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors that stop a SAW calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SawError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Weights must sum to 1.0 (current sum: {sum:.4})")]
    WeightsNotNormalized { sum: f64 },

    #[error("Criteria type must be 'benefit' or 'cost' (got '{value}' at index {index})")]
    UnknownCriterionKind { index: usize, value: String },
}

impl SawError {
    /// Every SAW failure is a rejected input.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ValidationFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_sum_message_uses_four_decimals() {
        let err = SawError::WeightsNotNormalized { sum: 0.9 };
        assert_eq!(err.to_string(), "Weights must sum to 1.0 (current sum: 0.9000)");
    }

    #[test]
    fn all_errors_are_validation_failures() {
        let err = SawError::UnknownCriterionKind {
            index: 0,
            value: "x".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
