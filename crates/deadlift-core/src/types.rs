use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// JointState
// ---------------------------------------------------------------------------

/// Positions, velocities, and accelerations for every joint of a chain,
/// in chain order (base to tip).
///
/// Lengths are not enforced at construction; every consumer validates
/// against its own joint count and rejects mismatches with a
/// [`DimensionError`](crate::error::DimensionError).
#[derive(Debug, Clone, PartialEq)]
pub struct JointState {
    /// Joint positions (rad or m).
    pub positions: Vec<f32>,
    /// Joint velocities (rad/s or m/s).
    pub velocities: Vec<f32>,
    /// Joint accelerations (rad/s² or m/s²).
    pub accelerations: Vec<f32>,
}

impl JointState {
    pub const fn new(positions: Vec<f32>, velocities: Vec<f32>, accelerations: Vec<f32>) -> Self {
        Self {
            positions,
            velocities,
            accelerations,
        }
    }

    /// All-zero state for `n` joints.
    pub fn zeros(n: usize) -> Self {
        Self {
            positions: vec![0.0; n],
            velocities: vec![0.0; n],
            accelerations: vec![0.0; n],
        }
    }

    /// A static configuration: the given positions with zero velocity and
    /// zero acceleration.
    pub fn at_rest(positions: &[f32]) -> Self {
        let n = positions.len();
        Self {
            positions: positions.to_vec(),
            velocities: vec![0.0; n],
            accelerations: vec![0.0; n],
        }
    }
}

// ---------------------------------------------------------------------------
// Wrench
// ---------------------------------------------------------------------------

/// A 6-component spatial load: linear force plus angular torque, expressed
/// in a joint's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wrench {
    /// Linear force (N).
    pub force: Vector3<f32>,
    /// Angular torque (Nm).
    pub torque: Vector3<f32>,
}

impl Wrench {
    pub const fn new(force: Vector3<f32>, torque: Vector3<f32>) -> Self {
        Self { force, torque }
    }

    /// The zero wrench.
    pub fn zero() -> Self {
        Self {
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }

    /// One zero wrench per joint.
    pub fn zero_set(n: usize) -> Vec<Self> {
        vec![Self::zero(); n]
    }

    /// A pure linear force of the given magnitude along the local +Z axis.
    ///
    /// This is the reference load applied at the chain tip during payload
    /// estimation.
    pub fn tip_load(magnitude: f32) -> Self {
        Self {
            force: Vector3::new(0.0, 0.0, magnitude),
            torque: Vector3::zeros(),
        }
    }

    /// Whether every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.force == Vector3::zeros() && self.torque == Vector3::zeros()
    }
}

impl Default for Wrench {
    fn default() -> Self {
        Self::zero()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ---- JointState ----

    #[test]
    fn joint_state_zeros() {
        let state = JointState::zeros(4);
        assert_eq!(state.positions, vec![0.0; 4]);
        assert_eq!(state.velocities, vec![0.0; 4]);
        assert_eq!(state.accelerations, vec![0.0; 4]);
    }

    #[test]
    fn joint_state_at_rest_keeps_positions() {
        let state = JointState::at_rest(&[0.1, -0.4, 1.2]);
        assert_eq!(state.positions, vec![0.1, -0.4, 1.2]);
        assert_eq!(state.velocities, vec![0.0; 3]);
        assert_eq!(state.accelerations, vec![0.0; 3]);
    }

    #[test]
    fn joint_state_new_allows_mismatched_lengths() {
        // Validation is the consumer's job, not the constructor's.
        let state = JointState::new(vec![0.0; 3], vec![0.0; 2], vec![0.0; 5]);
        assert_eq!(state.positions.len(), 3);
        assert_eq!(state.velocities.len(), 2);
        assert_eq!(state.accelerations.len(), 5);
    }

    // ---- Wrench ----

    #[test]
    fn wrench_zero_is_zero() {
        let w = Wrench::zero();
        assert!(w.is_zero());
        assert_eq!(w, Wrench::default());
    }

    #[test]
    fn wrench_zero_set_length() {
        let set = Wrench::zero_set(6);
        assert_eq!(set.len(), 6);
        assert!(set.iter().all(Wrench::is_zero));
    }

    #[test]
    fn wrench_tip_load_is_z_force_only() {
        let w = Wrench::tip_load(1.0);
        assert_relative_eq!(w.force.z, 1.0);
        assert_relative_eq!(w.force.x, 0.0);
        assert_relative_eq!(w.force.y, 0.0);
        assert_eq!(w.torque, Vector3::zeros());
        assert!(!w.is_zero());
    }

    #[test]
    fn wrench_tip_load_scales() {
        let w = Wrench::tip_load(2.5);
        assert_relative_eq!(w.force.z, 2.5);
    }

    #[test]
    fn wrench_is_copy() {
        let w = Wrench::tip_load(1.0);
        let w2 = w;
        let w3 = w;
        assert_eq!(w2, w3);
    }
}
