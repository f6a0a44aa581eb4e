//! Application layer - Commands and Handlers.
//!
//! This layer runs domain calculations on behalf of adapters and owns the
//! logging of their outcomes.

pub mod handlers;

pub use handlers::{
    CalculateAhpCommand, CalculateAhpHandler, CalculateAhpResult, CalculateSawCommand,
    CalculateSawHandler, CalculateSawResult,
};
