//! SAW HTTP adapter module.
//!
//! Exposes the Simple Additive Weighting ranking calculation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CalculateSawRequest, CalculateSawResponse};
pub use handlers::SawAppState;
pub use routes::saw_router;
