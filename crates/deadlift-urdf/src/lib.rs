//! URDF parsing and robot model representation for deadlift.
//!
//! Provides types for representing a robot's kinematic tree (links with
//! inertial properties, joints with effort limits) and parsing URDF XML
//! into that form. Geometry, visuals, and materials are outside this
//! crate's concern; only what torque and payload computation needs is kept.

pub mod error;
pub mod parser;
pub mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::UrdfError;
pub use parser::{parse_file, parse_string};
pub use types::{Inertial, JointData, JointLimits, JointType, LinkData, Origin, RobotModel};
