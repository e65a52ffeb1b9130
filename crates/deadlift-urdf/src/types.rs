//! Core data types for in-memory robot models.
//!
//! These types are the crate's canonical representation of a robot,
//! independent of the XML parsing layer. They carry exactly what torque
//! and payload computation needs: kinematic structure, inertial
//! properties, and joint limits.

use std::collections::HashMap;

use crate::error::UrdfError;

// ---------------------------------------------------------------------------
// JointType
// ---------------------------------------------------------------------------

/// URDF joint type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointType {
    /// Rotation about a single axis, with position limits.
    Revolute,
    /// Unlimited rotation about a single axis.
    Continuous,
    /// Translation along an axis, with position limits.
    Prismatic,
    /// No relative motion between parent and child.
    Fixed,
}

impl JointType {
    /// Whether this joint type has an actuatable degree of freedom.
    pub const fn is_actuated(self) -> bool {
        matches!(self, Self::Revolute | Self::Continuous | Self::Prismatic)
    }

    /// Whether this joint translates rather than rotates.
    pub const fn is_prismatic(self) -> bool {
        matches!(self, Self::Prismatic)
    }
}

// ---------------------------------------------------------------------------
// JointLimits
// ---------------------------------------------------------------------------

/// Limits on a joint's motion, effort, and velocity.
#[derive(Debug, Clone, Default)]
pub struct JointLimits {
    /// Lower position limit (rad or m). `None` means unbounded.
    pub lower: Option<f32>,
    /// Upper position limit (rad or m). `None` means unbounded.
    pub upper: Option<f32>,
    /// Maximum effort magnitude (Nm or N), symmetric in both directions.
    pub effort: f32,
    /// Maximum velocity (rad/s or m/s).
    pub velocity: f32,
}

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// A 3D pose specified as position + roll-pitch-yaw.
#[derive(Debug, Clone)]
pub struct Origin {
    /// Translation `[x, y, z]` in meters.
    pub xyz: [f32; 3],
    /// Rotation `[roll, pitch, yaw]` in radians.
    pub rpy: [f32; 3],
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            xyz: [0.0; 3],
            rpy: [0.0; 3],
        }
    }
}

// ---------------------------------------------------------------------------
// Inertial
// ---------------------------------------------------------------------------

/// Inertial properties of a link.
#[derive(Debug, Clone)]
pub struct Inertial {
    /// Origin of the inertial frame (center of mass) relative to the link
    /// frame.
    pub origin: Origin,
    /// Mass in kilograms.
    pub mass: f32,
    /// Inertia tensor elements `[ixx, ixy, ixz, iyy, iyz, izz]` about the
    /// center of mass, in the inertial frame.
    pub inertia: [f32; 6],
}

impl Default for Inertial {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            mass: 0.0,
            inertia: [0.0; 6],
        }
    }
}

// ---------------------------------------------------------------------------
// LinkData
// ---------------------------------------------------------------------------

/// In-memory representation of a URDF link.
#[derive(Debug, Clone)]
pub struct LinkData {
    /// Link name.
    pub name: String,
    /// Inertial properties. `None` for massless structural links.
    pub inertial: Option<Inertial>,
}

impl LinkData {
    /// Create a massless link with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inertial: None,
        }
    }
}

// ---------------------------------------------------------------------------
// JointData
// ---------------------------------------------------------------------------

/// In-memory representation of a URDF joint.
#[derive(Debug, Clone)]
pub struct JointData {
    /// Joint name.
    pub name: String,
    /// Joint type.
    pub joint_type: JointType,
    /// Parent link name.
    pub parent: String,
    /// Child link name.
    pub child: String,
    /// Joint origin relative to the parent link frame. The child link frame
    /// coincides with the joint frame.
    pub origin: Origin,
    /// Joint axis (unit vector, default `[0, 0, 1]`).
    pub axis: [f32; 3],
    /// Motion and effort limits.
    pub limits: JointLimits,
}

// ---------------------------------------------------------------------------
// RobotModel
// ---------------------------------------------------------------------------

/// Complete in-memory representation of a robot description.
///
/// Constructed by the parser. Contains the full kinematic tree: links,
/// joints, and the root link name.
#[derive(Debug, Clone)]
pub struct RobotModel {
    /// Robot name.
    pub name: String,
    /// All links, keyed by name.
    pub links: HashMap<String, LinkData>,
    /// All joints, keyed by name.
    pub joints: HashMap<String, JointData>,
    /// Name of the root link (the one never referenced as a child).
    pub root_link: String,
}

impl RobotModel {
    /// Get a link by name.
    pub fn link(&self, name: &str) -> Result<&LinkData, UrdfError> {
        self.links
            .get(name)
            .ok_or_else(|| UrdfError::MissingLink(name.into()))
    }

    /// Get a joint by name.
    pub fn joint(&self, name: &str) -> Result<&JointData, UrdfError> {
        self.joints
            .get(name)
            .ok_or_else(|| UrdfError::MissingJoint(name.into()))
    }

    /// Iterate over actuatable joints (revolute, continuous, prismatic).
    pub fn actuated_joints(&self) -> impl Iterator<Item = &JointData> {
        self.joints.values().filter(|j| j.joint_type.is_actuated())
    }

    /// Number of actuatable degrees of freedom in the whole model.
    pub fn dof(&self) -> usize {
        self.actuated_joints().count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
