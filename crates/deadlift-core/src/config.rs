use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_gravity() -> [f32; 3] {
    [0.0, 0.0, -9.81]
}
const fn default_reference_load() -> f32 {
    1.0
}

// ---------------------------------------------------------------------------
// CombinePolicy
// ---------------------------------------------------------------------------

/// How per-joint payload bounds are combined into one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombinePolicy {
    /// Report the largest per-joint bound and leave the saturated joint
    /// unset. Reproduces the historical solver behavior exactly.
    #[default]
    LeastRestrictive,
    /// Report the smallest per-joint bound and the joint that saturates
    /// first. This is the physically meaningful combination.
    MostRestrictive,
}

// ---------------------------------------------------------------------------
// GroupSpec
// ---------------------------------------------------------------------------

/// A named joint group: an ordered list of joint names expected to form a
/// single serial chain in the robot model, base to tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Joint names in chain order. May include fixed joints; those are
    /// folded into their neighbors and do not count as degrees of freedom.
    pub joints: Vec<String>,
}

// ---------------------------------------------------------------------------
// EstimatorConfig
// ---------------------------------------------------------------------------

/// Estimator configuration, typically loaded from a TOML file:
///
/// ```toml
/// gravity = [0.0, 0.0, -9.81]
/// reference_load = 1.0
/// combine = "least-restrictive"
///
/// [groups.arm]
/// joints = ["shoulder", "elbow", "wrist"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Gravity vector in the base frame (m/s²).
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 3],

    /// Magnitude of the reference force applied at the chain tip when
    /// probing payload sensitivity (N).
    #[serde(default = "default_reference_load")]
    pub reference_load: f32,

    /// How per-joint payload bounds combine into the final estimate.
    #[serde(default)]
    pub combine: CombinePolicy,

    /// Named joint groups.
    #[serde(default)]
    pub groups: HashMap<String, GroupSpec>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            reference_load: default_reference_load(),
            combine: CombinePolicy::default(),
            groups: HashMap::new(),
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference_load.is_finite() || self.reference_load <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "reference_load".into(),
                message: format!("must be positive and finite, got {}", self.reference_load),
            });
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(ConfigError::InvalidValue {
                field: "gravity".into(),
                message: "components must be finite".into(),
            });
        }
        for (name, group) in &self.groups {
            if group.joints.is_empty() {
                return Err(ConfigError::EmptyGroup(name.clone()));
            }
        }
        Ok(())
    }

    /// Look up a joint group by name.
    pub fn group(&self, name: &str) -> Result<&GroupSpec, ConfigError> {
        self.groups
            .get(name)
            .ok_or_else(|| ConfigError::UnknownGroup(name.into()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_config_is_valid() {
        let config = EstimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.gravity[2], -9.81);
        assert_relative_eq!(config.reference_load, 1.0);
        assert_eq!(config.combine, CombinePolicy::LeastRestrictive);
        assert!(config.groups.is_empty());
    }

    #[test]
    fn parse_minimal_toml_uses_defaults() {
        let config = EstimatorConfig::from_str("").unwrap();
        assert_eq!(config, EstimatorConfig::default());
    }

    #[test]
    fn parse_full_toml() {
        let config = EstimatorConfig::from_str(
            r#"
            gravity = [0.0, 0.0, -9.80665]
            reference_load = 2.0
            combine = "most-restrictive"

            [groups.arm]
            joints = ["shoulder", "elbow"]

            [groups.wrist]
            joints = ["wrist_pitch", "wrist_roll"]
            "#,
        )
        .unwrap();

        assert_relative_eq!(config.gravity[2], -9.80665);
        assert_relative_eq!(config.reference_load, 2.0);
        assert_eq!(config.combine, CombinePolicy::MostRestrictive);
        assert_eq!(config.groups.len(), 2);
        assert_eq!(
            config.group("arm").unwrap().joints,
            vec!["shoulder", "elbow"]
        );
    }

    #[test]
    fn unknown_group_lookup_fails() {
        let config = EstimatorConfig::default();
        let err = config.group("left_arm").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownGroup(name) if name == "left_arm"));
    }

    #[test]
    fn empty_group_rejected() {
        let err = EstimatorConfig::from_str(
            r#"
            [groups.arm]
            joints = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGroup(name) if name == "arm"));
    }

    #[test]
    fn zero_reference_load_rejected() {
        let err = EstimatorConfig::from_str("reference_load = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field, .. } if field == "reference_load"
        ));
    }

    #[test]
    fn negative_reference_load_rejected() {
        let err = EstimatorConfig::from_str("reference_load = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn non_finite_gravity_rejected() {
        let config = EstimatorConfig {
            gravity: [0.0, f32::NAN, -9.81],
            ..EstimatorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field, .. } if field == "gravity"
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = EstimatorConfig::from_str("gravity = \"down\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn combine_policy_round_trips_through_toml() {
        let config = EstimatorConfig {
            combine: CombinePolicy::MostRestrictive,
            ..EstimatorConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        let parsed = EstimatorConfig::from_str(&text).unwrap();
        assert_eq!(parsed.combine, CombinePolicy::MostRestrictive);
    }
}
