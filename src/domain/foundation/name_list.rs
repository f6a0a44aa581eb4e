//! Ordered list of unique, non-blank names.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ValidationError;

/// An ordered list of unique names.
///
/// Position is significant: the index of a name is the row/column it owns
/// in any matrix built alongside the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Validates and wraps a list of names.
    ///
    /// `field` is used in error messages; `min` is the minimum number of
    /// entries required.
    pub fn try_new(
        field: &str,
        names: Vec<String>,
        min: usize,
    ) -> Result<Self, ValidationError> {
        if names.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if names.len() < min {
            return Err(ValidationError::too_few(field, min, names.len()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.trim().is_empty() {
                return Err(ValidationError::invalid_format(
                    field,
                    "names cannot be blank",
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::duplicate_name(field, name.clone()));
            }
        }

        Ok(Self(names))
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the name at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Returns the position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    /// Iterates names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the names as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Unwraps into the owned names.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
