//! CalculateAhpHandler - Command handler for pairwise-comparison weighting.
//!
//! Runs the AHP calculator on submitted judgments and logs the verdict.

use tracing::{debug, warn};

use crate::domain::ahp::{AhpCalculator, AhpError, AhpOutcome, AhpSettings};

/// Command to derive weights from a pairwise comparison matrix.
#[derive(Debug, Clone)]
pub struct CalculateAhpCommand {
    /// Criterion names, one per matrix row/column.
    pub criteria: Vec<String>,
    /// Submitted judgments; `None` means "not compared".
    pub pairwise_matrix: Vec<Vec<Option<f64>>>,
}

/// Result of successful AHP calculation.
pub type CalculateAhpResult = AhpOutcome;

/// Handler for AHP calculations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateAhpHandler {
    calculator: AhpCalculator,
}

impl CalculateAhpHandler {
    pub fn new(settings: AhpSettings) -> Self {
        Self {
            calculator: AhpCalculator::new(settings),
        }
    }

    pub fn handle(&self, cmd: CalculateAhpCommand) -> Result<CalculateAhpResult, AhpError> {
        let criteria_count = cmd.criteria.len();

        match self.calculator.calculate(cmd.criteria, &cmd.pairwise_matrix) {
            Ok(outcome) => {
                debug!(
                    criteria = criteria_count,
                    lambda_max = outcome.consistency.lambda_max,
                    consistency_ratio = outcome.consistency.consistency_ratio,
                    is_consistent = outcome.consistency.is_consistent,
                    "AHP weights computed"
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!(criteria = criteria_count, code = %e.code(), error = %e, "AHP input rejected");
                Err(e)
            }
        }
    }
}
