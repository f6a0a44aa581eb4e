//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! weighting and ranking modules.

mod errors;
mod name_list;

pub use errors::{ErrorCode, ValidationError};
pub use name_list::NameList;
