//! Calculation engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{AhpSettings, RandomIndexPolicy, WeightMethod, CONSISTENCY_THRESHOLD};

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Behaviour for matrices larger than the random index table
    #[serde(default)]
    pub random_index_policy: RandomIndexPolicy,

    /// Weight derivation method
    #[serde(default)]
    pub weight_method: WeightMethod,

    /// Consistency ratios below this value are accepted
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,
}

impl EngineConfig {
    /// Settings for the AHP calculator
    pub fn ahp_settings(&self) -> AhpSettings {
        AhpSettings {
            random_index_policy: self.random_index_policy,
            weight_method: self.weight_method,
            consistency_threshold: self.consistency_threshold,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.consistency_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(t));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            random_index_policy: RandomIndexPolicy::default(),
            weight_method: WeightMethod::default(),
            consistency_threshold: default_consistency_threshold(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults_match_standard_ahp() {
        let config = EngineConfig::default();
        assert_eq!(config.random_index_policy, RandomIndexPolicy::Reject);
        assert_eq!(config.weight_method, WeightMethod::Approximate);
        assert_eq!(config.consistency_threshold, 0.1);
        assert_eq!(config.ahp_settings(), AhpSettings::default());
    }

    #[test]
    fn test_threshold_bounds() {
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            let config = EngineConfig {
                consistency_threshold: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "threshold {} should fail", bad);
        }

        let config = EngineConfig {
            consistency_threshold: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
