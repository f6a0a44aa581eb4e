//! AHP calculation errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors that stop an AHP calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No random index is tabulated for {size} criteria (maximum {max})")]
    UnsupportedSize { size: usize, max: usize },
}

impl AhpError {
    /// Returns the client-facing error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::Validation(_) => ErrorCode::ValidationFailed,
            AhpError::UnsupportedSize { .. } => ErrorCode::UnsupportedSize,
        }
    }
}
