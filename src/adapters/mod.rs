//! Adapters - Connect the calculation engine to external systems.
//!
//! - `http` - REST endpoints built on axum

pub mod http;

pub use http::app_router;
