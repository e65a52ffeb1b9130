//! Recursive Newton-Euler inverse dynamics over a [`SerialChain`].
//!
//! Given joint positions, velocities, accelerations, and per-joint
//! external wrenches, computes the torque (or force, for prismatic
//! joints) each joint must exert. Gravity is folded in as a base
//! acceleration of `-g`, so no separate gravity term appears in the
//! recursion.
//!
//! The outward pass propagates angular velocity, angular acceleration,
//! and linear acceleration from base to tip, evaluating each composite
//! body's inertial force and moment at its center of mass. The inward
//! pass accumulates wrenches tip to base and projects them onto each
//! joint axis.

use nalgebra::Vector3;

use deadlift_core::traits::InverseDynamics;
use deadlift_core::types::{JointState, Wrench};

use crate::chain::{joint_motion, SerialChain};

/// Inverse-dynamics solver for a serial chain.
///
/// Holds only immutable data; queries from concurrent threads are safe.
pub struct RneSolver {
    chain: SerialChain,
    gravity: Vector3<f32>,
}

impl RneSolver {
    /// Create a solver for `chain` under the given gravity vector
    /// (base frame, m/s²).
    pub const fn new(chain: SerialChain, gravity: Vector3<f32>) -> Self {
        Self { chain, gravity }
    }

    /// The chain this solver was built for.
    pub const fn chain(&self) -> &SerialChain {
        &self.chain
    }

    /// Gravity vector in the base frame.
    pub const fn gravity(&self) -> Vector3<f32> {
        self.gravity
    }
}

impl InverseDynamics for RneSolver {
    fn dof(&self) -> usize {
        self.chain.dof()
    }

    /// # Panics
    ///
    /// Panics if any input sequence's length differs from [`dof()`](Self::dof);
    /// callers validate dimensions before delegating here.
    fn solve(&self, state: &JointState, wrenches: &[Wrench]) -> Vec<f32> {
        let n = self.chain.dof();
        assert_eq!(state.positions.len(), n, "positions length must equal DOF");
        assert_eq!(
            state.velocities.len(),
            n,
            "velocities length must equal DOF"
        );
        assert_eq!(
            state.accelerations.len(),
            n,
            "accelerations length must equal DOF"
        );
        assert_eq!(wrenches.len(), n, "wrenches length must equal DOF");

        let joints = self.chain.joints();
        let mut transforms = Vec::with_capacity(n);
        let mut body_forces = vec![Vector3::zeros(); n];
        let mut body_moments = vec![Vector3::zeros(); n];

        // Outward pass: velocities and accelerations, base to tip.
        let mut w_prev = Vector3::zeros();
        let mut al_prev = Vector3::zeros();
        // Gravity enters as an upward base acceleration.
        let mut a_prev = -self.gravity;

        for (i, joint) in joints.iter().enumerate() {
            let t = joint.origin * joint_motion(&joint.axis, joint.is_prismatic, state.positions[i]);
            let rot_inv = t.rotation.inverse();
            let p = t.translation.vector;
            let s = joint.axis.into_inner();
            let qd = state.velocities[i];
            let qdd = state.accelerations[i];

            let w_base = rot_inv * w_prev;
            let al_base = rot_inv * al_prev;
            let a_frame =
                rot_inv * (a_prev + al_prev.cross(&p) + w_prev.cross(&w_prev.cross(&p)));

            let (w, al, a) = if joint.is_prismatic {
                let a = a_frame + s * qdd + 2.0 * w_base.cross(&(s * qd));
                (w_base, al_base, a)
            } else {
                let w = w_base + s * qd;
                let al = al_base + s * qdd + w_base.cross(&(s * qd));
                (w, al, a_frame)
            };

            let body = &joint.body;
            let a_com = a + al.cross(&body.com) + w.cross(&w.cross(&body.com));
            body_forces[i] = body.mass * a_com;
            body_moments[i] = body.inertia * al + w.cross(&(body.inertia * w));

            transforms.push(t);
            w_prev = w;
            al_prev = al;
            a_prev = a;
        }

        // Inward pass: accumulate wrenches tip to base and project onto
        // each joint axis.
        let mut torques = vec![0.0; n];
        let mut f_child = Vector3::zeros();
        let mut n_child = Vector3::zeros();

        for i in (0..n).rev() {
            let joint = &joints[i];
            let mut f = body_forces[i];
            let mut moment = body_moments[i] + joint.body.com.cross(&body_forces[i]);

            if i + 1 < n {
                let t_child = &transforms[i + 1];
                let fc = t_child.rotation * f_child;
                f += fc;
                moment += t_child.rotation * n_child + t_child.translation.vector.cross(&fc);
            }

            // External load on this link, expressed in its own frame. The
            // terminal wrench acts at the tip frame origin; all others act
            // at their joint frame origin.
            let external = &wrenches[i];
            let at = if i + 1 == n {
                self.chain.tip_offset().translation.vector
            } else {
                Vector3::zeros()
            };
            f -= external.force;
            moment -= external.torque + at.cross(&external.force);

            torques[i] = if joint.is_prismatic {
                joint.axis.dot(&f)
            } else {
                joint.axis.dot(&moment)
            };
            f_child = f;
            n_child = moment;
        }

        torques
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
