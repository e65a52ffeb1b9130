//! URDF XML parsing using `urdf-rs`.
//!
//! Converts `urdf_rs` types into the crate's canonical [`RobotModel`]
//! representation.

// All conversions from urdf-rs f64 → deadlift f32 are intentional truncations.
#![allow(clippy::cast_possible_truncation)]

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::UrdfError;
use crate::types::{Inertial, JointData, JointLimits, JointType, LinkData, Origin, RobotModel};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a URDF file from disk into a [`RobotModel`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<RobotModel, UrdfError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| UrdfError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_string(&content)
}

/// Parse a URDF XML string into a [`RobotModel`].
pub fn parse_string(xml: &str) -> Result<RobotModel, UrdfError> {
    let robot = urdf_rs::read_from_string(xml).map_err(|e| UrdfError::Parse(e.to_string()))?;
    convert_robot(&robot)
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn convert_robot(robot: &urdf_rs::Robot) -> Result<RobotModel, UrdfError> {
    let links: HashMap<String, LinkData> = robot
        .links
        .iter()
        .map(|l| (l.name.clone(), convert_link(l)))
        .collect();

    let joints: HashMap<String, JointData> = robot
        .joints
        .iter()
        .map(|j| convert_joint(j).map(|jd| (jd.name.clone(), jd)))
        .collect::<Result<_, _>>()?;

    // Root link = a link that is never a child of any joint.
    let child_links: HashSet<&str> = joints.values().map(|j| j.child.as_str()).collect();
    let root_link = links
        .keys()
        .find(|name| !child_links.contains(name.as_str()))
        .ok_or(UrdfError::NoRootLink)?
        .clone();

    Ok(RobotModel {
        name: robot.name.clone(),
        links,
        joints,
        root_link,
    })
}

fn convert_link(link: &urdf_rs::Link) -> LinkData {
    // urdf-rs defaults absent <inertial> blocks to zero mass; treat those
    // links as massless so downstream inertia merging can skip them.
    let inertial = if link.inertial.mass.value > 0.0 {
        Some(convert_inertial(&link.inertial))
    } else {
        None
    };
    LinkData {
        name: link.name.clone(),
        inertial,
    }
}

fn convert_joint(joint: &urdf_rs::Joint) -> Result<JointData, UrdfError> {
    let joint_type = convert_joint_type(&joint.joint_type)?;

    Ok(JointData {
        name: joint.name.clone(),
        joint_type,
        parent: joint.parent.link.clone(),
        child: joint.child.link.clone(),
        origin: convert_pose(&joint.origin),
        axis: vec3_to_f32(&joint.axis.xyz),
        limits: convert_limits(&joint.limit),
    })
}

fn convert_joint_type(jt: &urdf_rs::JointType) -> Result<JointType, UrdfError> {
    match jt {
        urdf_rs::JointType::Revolute => Ok(JointType::Revolute),
        urdf_rs::JointType::Continuous => Ok(JointType::Continuous),
        urdf_rs::JointType::Prismatic => Ok(JointType::Prismatic),
        urdf_rs::JointType::Fixed => Ok(JointType::Fixed),
        urdf_rs::JointType::Floating => Err(UrdfError::UnsupportedJointType("Floating".into())),
        urdf_rs::JointType::Planar => Err(UrdfError::UnsupportedJointType("Planar".into())),
        urdf_rs::JointType::Spherical => Err(UrdfError::UnsupportedJointType("Spherical".into())),
    }
}

fn convert_limits(limit: &urdf_rs::JointLimit) -> JointLimits {
    // urdf-rs defaults lower/upper to 0.0 for joints without limits.
    // We map 0.0 == 0.0 (both zero) as "no position limits".
    let has_limits = (limit.lower - limit.upper).abs() > f64::EPSILON;
    JointLimits {
        lower: if has_limits {
            Some(limit.lower as f32)
        } else {
            None
        },
        upper: if has_limits {
            Some(limit.upper as f32)
        } else {
            None
        },
        effort: limit.effort as f32,
        velocity: limit.velocity as f32,
    }
}

fn convert_pose(pose: &urdf_rs::Pose) -> Origin {
    Origin {
        xyz: vec3_to_f32(&pose.xyz),
        rpy: vec3_to_f32(&pose.rpy),
    }
}

fn convert_inertial(inertial: &urdf_rs::Inertial) -> Inertial {
    let i = &inertial.inertia;
    Inertial {
        origin: convert_pose(&inertial.origin),
        mass: inertial.mass.value as f32,
        inertia: [
            i.ixx as f32,
            i.ixy as f32,
            i.ixz as f32,
            i.iyy as f32,
            i.iyz as f32,
            i.izz as f32,
        ],
    }
}

const fn vec3_to_f32(v: &[f64; 3]) -> [f32; 3] {
    [v[0] as f32, v[1] as f32, v[2] as f32]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MINIMAL_URDF: &str = r#"
        <robot name="pedestal">
            <link name="base_link"/>
        </robot>
    "#;

    const ONE_JOINT_URDF: &str = r#"
        <robot name="one_joint">
            <link name="base_link">
                <inertial>
                    <mass value="10.0"/>
                    <inertia ixx="0.1" ixy="0" ixz="0" iyy="0.1" iyz="0" izz="0.1"/>
                </inertial>
            </link>
            <link name="boom">
                <inertial>
                    <origin xyz="0.2 0 0" rpy="0 0 0"/>
                    <mass value="3.0"/>
                    <inertia ixx="0.002" ixy="0" ixz="0" iyy="0.04" iyz="0" izz="0.04"/>
                </inertial>
            </link>
            <joint name="pivot" type="revolute">
                <parent link="base_link"/>
                <child link="boom"/>
                <origin xyz="0 0 0.5" rpy="0 0 0"/>
                <axis xyz="0 1 0"/>
                <limit lower="-1.57" upper="1.57" effort="100" velocity="5"/>
            </joint>
        </robot>
    "#;

    const MIXED_JOINT_URDF: &str = r#"
        <robot name="gantry_arm">
            <link name="base"/>
            <link name="carriage"/>
            <link name="boom"/>
            <link name="tool"/>
            <joint name="lift" type="prismatic">
                <parent link="base"/>
                <child link="carriage"/>
                <axis xyz="0 0 1"/>
                <limit lower="0.0" upper="1.2" effort="400" velocity="0.5"/>
            </joint>
            <joint name="swing" type="continuous">
                <parent link="carriage"/>
                <child link="boom"/>
                <axis xyz="0 0 1"/>
            </joint>
            <joint name="tool_mount" type="fixed">
                <parent link="boom"/>
                <child link="tool"/>
            </joint>
        </robot>
    "#;

    // -- parse_string --

    #[test]
    fn parse_minimal_urdf() {
        let model = parse_string(MINIMAL_URDF).unwrap();
        assert_eq!(model.name, "pedestal");
        assert_eq!(model.links.len(), 1);
        assert!(model.joints.is_empty());
        assert_eq!(model.root_link, "base_link");
    }

    #[test]
    fn parse_one_joint_robot() {
        let model = parse_string(ONE_JOINT_URDF).unwrap();
        assert_eq!(model.name, "one_joint");
        assert_eq!(model.links.len(), 2);
        assert_eq!(model.joints.len(), 1);
        assert_eq!(model.root_link, "base_link");
        assert_eq!(model.dof(), 1);
    }

    #[test]
    fn parse_mixed_joint_types() {
        let model = parse_string(MIXED_JOINT_URDF).unwrap();
        assert_eq!(model.joints.len(), 3);
        assert_eq!(model.dof(), 2); // prismatic + continuous, not fixed
        assert_eq!(
            model.joint("lift").unwrap().joint_type,
            JointType::Prismatic
        );
        assert_eq!(
            model.joint("tool_mount").unwrap().joint_type,
            JointType::Fixed
        );
    }

    // -- Joint data --

    #[test]
    fn joint_origin_axis_and_limits() {
        let model = parse_string(ONE_JOINT_URDF).unwrap();
        let pivot = model.joint("pivot").unwrap();

        assert_relative_eq!(pivot.origin.xyz[2], 0.5);
        assert_relative_eq!(pivot.axis[1], 1.0);
        assert_eq!(pivot.parent, "base_link");
        assert_eq!(pivot.child, "boom");
        assert_relative_eq!(pivot.limits.effort, 100.0);
        assert_relative_eq!(pivot.limits.velocity, 5.0);
        assert_relative_eq!(pivot.limits.lower.unwrap(), -1.57);
        assert_relative_eq!(pivot.limits.upper.unwrap(), 1.57);
    }

    #[test]
    fn continuous_joint_has_no_position_limits() {
        let model = parse_string(MIXED_JOINT_URDF).unwrap();
        let swing = model.joint("swing").unwrap();
        assert!(swing.limits.lower.is_none());
        assert!(swing.limits.upper.is_none());
    }

    // -- Inertial data --

    #[test]
    fn inertial_mass_com_and_tensor() {
        let model = parse_string(ONE_JOINT_URDF).unwrap();
        let boom = model.link("boom").unwrap();
        let inertial = boom.inertial.as_ref().unwrap();

        assert_relative_eq!(inertial.mass, 3.0);
        assert_relative_eq!(inertial.origin.xyz[0], 0.2);
        assert_relative_eq!(inertial.inertia[0], 0.002); // ixx
        assert_relative_eq!(inertial.inertia[3], 0.04); // iyy
        assert_relative_eq!(inertial.inertia[5], 0.04); // izz
    }

    #[test]
    fn massless_links_have_no_inertial() {
        let model = parse_string(MIXED_JOINT_URDF).unwrap();
        assert!(model.link("carriage").unwrap().inertial.is_none());
        assert!(model.link("tool").unwrap().inertial.is_none());
    }

    // -- Errors --

    #[test]
    fn malformed_xml_is_parse_error() {
        let err = parse_string("<robot name='broken'").unwrap_err();
        assert!(matches!(err, UrdfError::Parse(_)));
    }

    #[test]
    fn unsupported_joint_type_rejected() {
        let urdf = r#"
            <robot name="floater">
                <link name="a"/>
                <link name="b"/>
                <joint name="free" type="floating">
                    <parent link="a"/>
                    <child link="b"/>
                </joint>
            </robot>
        "#;
        let err = parse_string(urdf).unwrap_err();
        assert!(matches!(err, UrdfError::UnsupportedJointType(t) if t == "Floating"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_file("/nonexistent/robot.urdf").unwrap_err();
        assert!(matches!(err, UrdfError::Io { .. }));
    }
}
