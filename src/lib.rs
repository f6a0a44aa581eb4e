//! AHP Engine - Multi-criteria decision support
//!
//! This crate derives criterion weights from pairwise comparisons using the
//! Analytic Hierarchy Process, checks the judgments for consistency, and ranks
//! alternatives with Simple Additive Weighting.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
