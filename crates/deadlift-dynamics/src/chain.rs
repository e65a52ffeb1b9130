//! Serial kinematic chain extracted from a URDF [`RobotModel`].
//!
//! A [`SerialChain`] is an ordered list of actuated joints from a base
//! link to a tip link, built from a named joint group. It stores the
//! static transforms (origins), joint axes, effort limits, and composite
//! link inertias needed by the inverse-dynamics solver.

use nalgebra::{Isometry3, Matrix3, Translation3, UnitQuaternion, UnitVector3, Vector3};
use tracing::debug;

use deadlift_core::config::GroupSpec;
use deadlift_core::error::{ConfigError, EstimatorError, TopologyError};
use deadlift_urdf::{Origin, RobotModel};

use crate::inertia::LinkInertia;

/// A single actuated joint in the chain.
#[derive(Debug, Clone)]
pub struct ChainJoint {
    /// Name of this joint (from URDF).
    pub name: String,
    /// Static transform from the previous actuated joint's frame to this
    /// joint frame, with any intermediate fixed joints folded in.
    pub origin: Isometry3<f32>,
    /// Joint axis in the joint's local frame.
    pub axis: UnitVector3<f32>,
    /// Whether this is a prismatic joint (false = revolute).
    pub is_prismatic: bool,
    /// Maximum effort magnitude (Nm or N), symmetric in both directions.
    pub effort_limit: f32,
    /// Composite rigid body carried by this joint: its child link plus any
    /// links attached further along through fixed joints, expressed in
    /// this joint's frame.
    pub body: LinkInertia,
}

/// An ordered serial chain from base to tip.
///
/// Built from a [`RobotModel`] by walking an ordered joint group. Only
/// actuated joints (revolute, continuous, prismatic) contribute degrees of
/// freedom; fixed joints have their transforms folded into the next
/// actuated joint's origin and their link masses merged into the previous
/// actuated joint's body. Immutable once built.
#[derive(Debug, Clone)]
pub struct SerialChain {
    joints: Vec<ChainJoint>,
    /// Transform from the last actuated joint's frame to the tip link
    /// frame. Identity unless trailing fixed joints exist.
    tip_offset: Isometry3<f32>,
    base_link: String,
    tip_link: String,
}

impl SerialChain {
    /// Build a chain from the joints a group names, in order.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyGroup`] / [`ConfigError::UnknownJoint`] when
    ///   the group is empty or names a joint the model lacks.
    /// - [`TopologyError::Disconnected`] / [`TopologyError::Branching`]
    ///   when the listed joints do not form one unbranched base-to-tip
    ///   sequence.
    /// - [`TopologyError::NoActuatedJoints`] when every listed joint is
    ///   fixed.
    pub fn from_group(
        model: &RobotModel,
        group_name: &str,
        spec: &GroupSpec,
    ) -> Result<Self, EstimatorError> {
        if spec.joints.is_empty() {
            return Err(ConfigError::EmptyGroup(group_name.into()).into());
        }

        let mut joints: Vec<ChainJoint> = Vec::new();
        // Transform from the last actuated joint's frame to the link the
        // walk currently stands on.
        let mut cursor = Isometry3::identity();
        let mut prev_child: Option<String> = None;
        // Links touched so far, for telling a branch from a plain break.
        let mut seen_links: Vec<String> = Vec::new();
        let mut base_link = String::new();
        let mut tip_link = String::new();

        for joint_name in &spec.joints {
            let joint = model.joint(joint_name).map_err(|_| ConfigError::UnknownJoint {
                group: group_name.into(),
                joint: joint_name.clone(),
            })?;

            match &prev_child {
                None => {
                    base_link = joint.parent.clone();
                    seen_links.push(joint.parent.clone());
                }
                Some(expected) if joint.parent != *expected => {
                    let err = if seen_links.iter().any(|l| l == &joint.parent) {
                        TopologyError::Branching(joint.parent.clone())
                    } else {
                        TopologyError::Disconnected {
                            joint: joint.name.clone(),
                            parent: joint.parent.clone(),
                            expected: expected.clone(),
                        }
                    };
                    return Err(err.into());
                }
                Some(_) => {}
            }

            let origin = origin_to_isometry(&joint.origin);
            let child_inertia = model
                .links
                .get(&joint.child)
                .and_then(|l| l.inertial.as_ref())
                .map(LinkInertia::from_inertial);

            if joint.joint_type.is_actuated() {
                let axis = Vector3::new(joint.axis[0], joint.axis[1], joint.axis[2]);
                joints.push(ChainJoint {
                    name: joint.name.clone(),
                    origin: cursor * origin,
                    axis: UnitVector3::new_normalize(axis),
                    is_prismatic: joint.joint_type.is_prismatic(),
                    effort_limit: joint.limits.effort,
                    body: child_inertia.unwrap_or_else(LinkInertia::zero),
                });
                cursor = Isometry3::identity();
            } else {
                cursor *= origin;
                // A fixed link's mass rides on the actuated joint before it.
                // Fixed links ahead of the first actuated joint rest on the
                // base and load nothing.
                if let (Some(last), Some(inertia)) = (joints.last_mut(), child_inertia) {
                    last.body = last.body.combined(&inertia.transformed(&cursor));
                }
            }

            seen_links.push(joint.child.clone());
            prev_child = Some(joint.child.clone());
            tip_link = joint.child.clone();
        }

        if joints.is_empty() {
            return Err(TopologyError::NoActuatedJoints(group_name.into()).into());
        }

        debug!(
            "group '{}': base link {}, tip link {}, {} actuated joints",
            group_name,
            base_link,
            tip_link,
            joints.len()
        );

        Ok(Self {
            joints,
            tip_offset: cursor,
            base_link,
            tip_link,
        })
    }

    /// Number of actuated degrees of freedom.
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    /// Joint names in chain order.
    pub fn joint_names(&self) -> Vec<&str> {
        self.joints.iter().map(|j| j.name.as_str()).collect()
    }

    /// Access the joint definitions.
    pub fn joints(&self) -> &[ChainJoint] {
        &self.joints
    }

    /// Per-joint effort limits in chain order.
    pub fn effort_limits(&self) -> Vec<f32> {
        self.joints.iter().map(|j| j.effort_limit).collect()
    }

    /// Transform from the last actuated joint's frame to the tip frame.
    pub fn tip_offset(&self) -> &Isometry3<f32> {
        &self.tip_offset
    }

    /// Name of the link the chain is rooted at.
    pub fn base_link(&self) -> &str {
        &self.base_link
    }

    /// Name of the link at the free end of the chain.
    pub fn tip_link(&self) -> &str {
        &self.tip_link
    }
}

/// Convert a URDF [`Origin`] (xyz + rpy) to an [`Isometry3`].
pub(crate) fn origin_to_isometry(origin: &Origin) -> Isometry3<f32> {
    let translation = Translation3::new(origin.xyz[0], origin.xyz[1], origin.xyz[2]);
    let rotation = UnitQuaternion::from_matrix(&rotation_from_rpy(
        origin.rpy[0],
        origin.rpy[1],
        origin.rpy[2],
    ));
    Isometry3::from_parts(translation, rotation)
}

/// Build a rotation matrix from roll-pitch-yaw (extrinsic ZYX, the URDF
/// fixed-axis convention).
pub(crate) fn rotation_from_rpy(roll: f32, pitch: f32, yaw: f32) -> Matrix3<f32> {
    let (sr, cr) = roll.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();

    Matrix3::new(
        cy * cp,
        cy * sp * sr - sy * cr,
        cy * sp * cr + sy * sr,
        sy * cp,
        sy * sp * sr + cy * cr,
        sy * sp * cr - cy * sr,
        -sp,
        cp * sr,
        cp * cr,
    )
}

/// Compute the motion transform for a single joint at a given position.
pub(crate) fn joint_motion(
    axis: &UnitVector3<f32>,
    is_prismatic: bool,
    position: f32,
) -> Isometry3<f32> {
    if is_prismatic {
        Isometry3::from_parts(
            Translation3::from(axis.into_inner() * position),
            UnitQuaternion::identity(),
        )
    } else {
        Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(axis, position),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
