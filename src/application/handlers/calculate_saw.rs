//! CalculateSawHandler - Command handler for weighted alternative ranking.

use tracing::{debug, warn};

use crate::domain::saw::{SawCalculator, SawError, SawInput, SawOutcome};

/// Command to rank alternatives with Simple Additive Weighting.
pub type CalculateSawCommand = SawInput;

/// Result of successful SAW calculation.
pub type CalculateSawResult = SawOutcome;

/// Handler for SAW calculations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateSawHandler;

impl CalculateSawHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CalculateSawCommand) -> Result<CalculateSawResult, SawError> {
        let alternatives = cmd.alternatives.len();
        let criteria = cmd.criteria.len();

        let result = SawCalculator::calculate(cmd);
        match &result {
            Ok(outcome) => {
                debug!(
                    alternatives,
                    criteria,
                    best = ?outcome.best().map(|b| b.alternative),
                    "SAW ranking computed"
                );
            }
            Err(e) => {
                warn!(alternatives, criteria, error = %e, "SAW input rejected");
            }
        }
        result
    }
}
