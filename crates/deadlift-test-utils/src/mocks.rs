//! Mock implementations of the inverse-dynamics capability for testing.
//!
//! Both oracles are deterministic by construction, so determinism and
//! linearity properties of the payload estimator can be tested without a
//! real solver.

use deadlift_core::traits::InverseDynamics;
use deadlift_core::types::{JointState, Wrench};

// ---------------------------------------------------------------------------
// ConstantOracle
// ---------------------------------------------------------------------------

/// An oracle that returns the same torque vector for every query.
pub struct ConstantOracle {
    torques: Vec<f32>,
}

impl ConstantOracle {
    /// Create an oracle that always returns `torques`.
    pub const fn new(torques: Vec<f32>) -> Self {
        Self { torques }
    }

    /// An oracle returning zeros for `n` joints.
    pub fn zeros(n: usize) -> Self {
        Self {
            torques: vec![0.0; n],
        }
    }
}

impl InverseDynamics for ConstantOracle {
    fn dof(&self) -> usize {
        self.torques.len()
    }

    fn solve(&self, _state: &JointState, _wrenches: &[Wrench]) -> Vec<f32> {
        self.torques.clone()
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ConstantOracle"
    }
}

// ---------------------------------------------------------------------------
// LinearOracle
// ---------------------------------------------------------------------------

/// An oracle linear in the terminal wrench's z-force, mimicking rigid-body
/// dynamics at a frozen configuration:
///
/// `torques = holding + fz_tip · per_unit`
///
/// With an all-zero wrench set it returns `holding`; with a unit z-force at
/// the tip it returns `holding + per_unit`.
pub struct LinearOracle {
    holding: Vec<f32>,
    per_unit: Vec<f32>,
}

impl LinearOracle {
    /// Create an oracle from the no-load torques and the per-unit-force
    /// sensitivity of each joint.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different lengths.
    pub fn new(holding: Vec<f32>, per_unit: Vec<f32>) -> Self {
        assert_eq!(
            holding.len(),
            per_unit.len(),
            "holding and per_unit must have equal lengths"
        );
        Self { holding, per_unit }
    }
}

impl InverseDynamics for LinearOracle {
    fn dof(&self) -> usize {
        self.holding.len()
    }

    fn solve(&self, _state: &JointState, wrenches: &[Wrench]) -> Vec<f32> {
        let fz = wrenches.last().map_or(0.0, |w| w.force.z);
        self.holding
            .iter()
            .zip(self.per_unit.iter())
            .map(|(h, p)| h + fz * p)
            .collect()
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "LinearOracle"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
