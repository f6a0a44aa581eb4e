//! Domain layer containing the calculation logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (name lists, errors, error codes)
//! - `ahp` - Pairwise-comparison weighting and consistency analysis
//! - `saw` - Simple Additive Weighting ranking of alternatives

pub mod ahp;
pub mod foundation;
pub mod saw;
