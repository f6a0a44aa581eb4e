//! Criterion kind - whether higher or lower values are preferred.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::SawError;

/// Direction of preference for a criterion.
///
/// Parsed from client labels with [`FromStr`]; serialized as its lowercase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Higher is better.
    Benefit,
    /// Lower is better.
    Cost,
}

impl CriterionKind {
    /// Parses every label, reporting the first one that is not recognized.
    pub fn parse_all(labels: &[String]) -> Result<Vec<Self>, SawError> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                label.parse().map_err(|_| SawError::UnknownCriterionKind {
                    index,
                    value: label.clone(),
                })
            })
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CriterionKind::Benefit => "benefit",
            CriterionKind::Cost => "cost",
        }
    }
}

impl FromStr for CriterionKind {
    type Err = ();

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionKind::Benefit),
            "cost" => Ok(CriterionKind::Cost),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
