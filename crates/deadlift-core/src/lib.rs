// deadlift-core: Types, traits, config, and errors for the deadlift payload toolkit.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use config::{CombinePolicy, EstimatorConfig, GroupSpec};
pub use error::{ConfigError, DimensionError, EstimatorError, TopologyError};
pub use traits::InverseDynamics;
pub use types::{JointState, Wrench};
