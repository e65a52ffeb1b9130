//! Rigid-body inertia of a chain link.
//!
//! Links attached through fixed joints carry no degree of freedom of their
//! own; their mass still loads every actuated joint before them. The chain
//! builder merges such links into the composite body of the preceding
//! actuated joint using the operations here.

use nalgebra::{Isometry3, Matrix3, Vector3};

use deadlift_urdf::Inertial;

use crate::chain::rotation_from_rpy;

/// Mass, center of mass, and rotational inertia of a rigid body, expressed
/// in some link frame. The inertia tensor is taken about the center of
/// mass, in the frame's axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkInertia {
    /// Mass (kg).
    pub mass: f32,
    /// Center of mass in the link frame (m).
    pub com: Vector3<f32>,
    /// Inertia tensor about the center of mass (kg·m²).
    pub inertia: Matrix3<f32>,
}

impl LinkInertia {
    /// A massless body.
    pub fn zero() -> Self {
        Self {
            mass: 0.0,
            com: Vector3::zeros(),
            inertia: Matrix3::zeros(),
        }
    }

    /// Build from URDF inertial data: the center of mass is the inertial
    /// origin, and the tensor is rotated from the inertial frame into the
    /// link frame axes.
    pub fn from_inertial(inertial: &Inertial) -> Self {
        let [ixx, ixy, ixz, iyy, iyz, izz] = inertial.inertia;
        let tensor = Matrix3::new(ixx, ixy, ixz, ixy, iyy, iyz, ixz, iyz, izz);
        let rot = rotation_from_rpy(
            inertial.origin.rpy[0],
            inertial.origin.rpy[1],
            inertial.origin.rpy[2],
        );
        Self {
            mass: inertial.mass,
            com: Vector3::new(
                inertial.origin.xyz[0],
                inertial.origin.xyz[1],
                inertial.origin.xyz[2],
            ),
            inertia: rot * tensor * rot.transpose(),
        }
    }

    /// Express this body in a new frame, where `iso` maps this body's frame
    /// into the new one.
    pub fn transformed(&self, iso: &Isometry3<f32>) -> Self {
        let rot = iso.rotation.to_rotation_matrix();
        Self {
            mass: self.mass,
            com: (iso * nalgebra::Point3::from(self.com)).coords,
            inertia: rot.matrix() * self.inertia * rot.matrix().transpose(),
        }
    }

    /// Merge another body expressed in the same frame into this one,
    /// producing the composite rigid body.
    pub fn combined(&self, other: &Self) -> Self {
        let mass = self.mass + other.mass;
        if mass == 0.0 {
            return Self {
                mass: 0.0,
                com: Vector3::zeros(),
                inertia: self.inertia + other.inertia,
            };
        }
        let com = (self.com * self.mass + other.com * other.mass) / mass;
        let inertia = shift_to(self, &com) + shift_to(other, &com);
        Self { mass, com, inertia }
    }
}

/// Parallel-axis shift of a body's COM inertia to reference point `point`
/// (same frame).
fn shift_to(body: &LinkInertia, point: &Vector3<f32>) -> Matrix3<f32> {
    let d = point - body.com;
    body.inertia + body.mass * (d.dot(&d) * Matrix3::identity() - d * d.transpose())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
