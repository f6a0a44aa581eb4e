//! HTTP adapters - REST API implementations.
//!
//! Each calculation has its own HTTP adapter for endpoint exposure.

pub mod ahp;
pub mod envelope;
pub mod health;
pub mod router;
pub mod saw;

// Re-export key types for convenience
pub use ahp::{ahp_router, AhpAppState};
pub use envelope::{CalculationApiError, FailureResponse};
pub use health::health_router;
pub use router::app_router;
pub use saw::{saw_router, SawAppState};
