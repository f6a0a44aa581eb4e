//! Command handlers for the calculation endpoints.
//!
//! Handlers are synchronous: calculations are pure and finish within the
//! request that triggered them.

mod calculate_ahp;
mod calculate_saw;

pub use calculate_ahp::{CalculateAhpCommand, CalculateAhpHandler, CalculateAhpResult};
pub use calculate_saw::{CalculateSawCommand, CalculateSawHandler, CalculateSawResult};
