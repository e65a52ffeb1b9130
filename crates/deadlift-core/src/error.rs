use thiserror::Error;

/// Top-level error type for deadlift crates.
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Dimension error: {0}")]
    Dimension(#[from] DimensionError),
}

/// Configuration errors. Fatal to the estimator instance being built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown joint group: {0}")]
    UnknownGroup(String),

    #[error("Group {group} names unknown joint: {joint}")]
    UnknownJoint { group: String, joint: String },

    #[error("Group {0} has an empty joint list")]
    EmptyGroup(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Chain topology errors. Fatal to the estimator instance being built.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("Joint {joint} does not connect to the chain: its parent link {parent} is not {expected}")]
    Disconnected {
        joint: String,
        parent: String,
        expected: String,
    },

    #[error("Group branches at link {0}: not a serial chain")]
    Branching(String),

    #[error("Group {0} contains no actuated joints")]
    NoActuatedJoints(String),
}

/// Joint-indexed input length mismatches.
///
/// One variant per argument so the caller knows which input is malformed.
/// Copy + static messages for cheap propagation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("Positions vector length mismatch: expected {expected}, got {got}")]
    Positions { expected: usize, got: usize },

    #[error("Velocities vector length mismatch: expected {expected}, got {got}")]
    Velocities { expected: usize, got: usize },

    #[error("Accelerations vector length mismatch: expected {expected}, got {got}")]
    Accelerations { expected: usize, got: usize },

    #[error("Wrenches vector length mismatch: expected {expected}, got {got}")]
    Wrenches { expected: usize, got: usize },

    #[error("Torques vector length mismatch: expected {expected}, got {got}")]
    Torques { expected: usize, got: usize },

    #[error("Zero-torques vector length mismatch: expected {expected}, got {got}")]
    ZeroTorques { expected: usize, got: usize },

    #[error("Torque limits vector length mismatch: expected {expected}, got {got}")]
    TorqueLimits { expected: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimator_error_from_config_error() {
        let err = ConfigError::UnknownGroup("arm".into());
        let top: EstimatorError = err.into();
        assert!(matches!(top, EstimatorError::Config(_)));
        assert!(top.to_string().contains("arm"));
    }

    #[test]
    fn estimator_error_from_topology_error() {
        let err = TopologyError::Branching("wrist".into());
        let top: EstimatorError = err.into();
        assert!(matches!(top, EstimatorError::Topology(_)));
        assert!(top.to_string().contains("wrist"));
    }

    #[test]
    fn estimator_error_from_dimension_error() {
        let err = DimensionError::Positions {
            expected: 6,
            got: 3,
        };
        let top: EstimatorError = err.into();
        assert!(matches!(top, EstimatorError::Dimension(_)));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn dimension_error_is_copy() {
        let err = DimensionError::Wrenches {
            expected: 4,
            got: 2,
        };
        let err2 = err; // Copy
        assert_eq!(err, err2);
    }

    #[test]
    fn dimension_error_display_messages() {
        assert_eq!(
            DimensionError::Positions {
                expected: 6,
                got: 5
            }
            .to_string(),
            "Positions vector length mismatch: expected 6, got 5"
        );
        assert_eq!(
            DimensionError::Velocities {
                expected: 2,
                got: 0
            }
            .to_string(),
            "Velocities vector length mismatch: expected 2, got 0"
        );
        assert_eq!(
            DimensionError::Accelerations {
                expected: 2,
                got: 3
            }
            .to_string(),
            "Accelerations vector length mismatch: expected 2, got 3"
        );
        assert_eq!(
            DimensionError::Wrenches {
                expected: 7,
                got: 6
            }
            .to_string(),
            "Wrenches vector length mismatch: expected 7, got 6"
        );
        assert_eq!(
            DimensionError::Torques {
                expected: 3,
                got: 1
            }
            .to_string(),
            "Torques vector length mismatch: expected 3, got 1"
        );
        assert_eq!(
            DimensionError::ZeroTorques {
                expected: 3,
                got: 4
            }
            .to_string(),
            "Zero-torques vector length mismatch: expected 3, got 4"
        );
        assert_eq!(
            DimensionError::TorqueLimits {
                expected: 6,
                got: 7
            }
            .to_string(),
            "Torque limits vector length mismatch: expected 6, got 7"
        );
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::UnknownGroup("left_arm".into()).to_string(),
            "Unknown joint group: left_arm"
        );
        assert_eq!(
            ConfigError::UnknownJoint {
                group: "arm".into(),
                joint: "elbow".into()
            }
            .to_string(),
            "Group arm names unknown joint: elbow"
        );
        assert_eq!(
            ConfigError::EmptyGroup("arm".into()).to_string(),
            "Group arm has an empty joint list"
        );
        assert_eq!(
            ConfigError::InvalidValue {
                field: "reference_load".into(),
                message: "must be positive".into()
            }
            .to_string(),
            "Invalid value for reference_load: must be positive"
        );
    }

    #[test]
    fn topology_error_display_messages() {
        assert_eq!(
            TopologyError::Disconnected {
                joint: "elbow".into(),
                parent: "torso".into(),
                expected: "upper_arm".into()
            }
            .to_string(),
            "Joint elbow does not connect to the chain: its parent link torso is not upper_arm"
        );
        assert_eq!(
            TopologyError::Branching("chest".into()).to_string(),
            "Group branches at link chest: not a serial chain"
        );
        assert_eq!(
            TopologyError::NoActuatedJoints("mount".into()).to_string(),
            "Group mount contains no actuated joints"
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn errors_are_send_sync() {
        assert_send_sync::<EstimatorError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<TopologyError>();
        assert_send_sync::<DimensionError>();
    }
}
