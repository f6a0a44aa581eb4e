//! AHP HTTP adapter module.
//!
//! Exposes the pairwise-comparison weighting calculation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CalculateAhpRequest, CalculateAhpResponse};
pub use handlers::AhpAppState;
pub use routes::ahp_router;
