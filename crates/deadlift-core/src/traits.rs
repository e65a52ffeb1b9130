use crate::types::{JointState, Wrench};

// ---------------------------------------------------------------------------
// InverseDynamics
// ---------------------------------------------------------------------------

/// Capability trait for an inverse-dynamics solver: map a joint state and
/// per-joint external wrenches to the torque each joint must exert.
///
/// Implementations must be deterministic and total: identical inputs yield
/// identical outputs, and every valid input produces a result. Inputs are
/// pre-validated by the caller to length [`dof()`](Self::dof); implementations
/// may assume it and panic on violation rather than returning an error.
///
/// The solver is injected into the payload estimator rather than baked in,
/// so alternative formulations and deterministic test doubles slot in
/// without touching the estimation logic.
pub trait InverseDynamics: Send + Sync {
    /// Number of actuated joints this solver was built for.
    fn dof(&self) -> usize;

    /// Compute per-joint torques for the given state and external wrenches.
    ///
    /// `wrenches[i]` is the external load on joint `i`'s link, expressed in
    /// that joint's local frame. Gravity is internal to the solver, not an
    /// input.
    fn solve(&self, state: &JointState, wrenches: &[Wrench]) -> Vec<f32>;

    /// Human-readable name for this solver.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Trivial oracle returning one torque per joint equal to its position.
    struct EchoOracle {
        dof: usize,
    }

    impl InverseDynamics for EchoOracle {
        fn dof(&self) -> usize {
            self.dof
        }

        fn solve(&self, state: &JointState, _wrenches: &[Wrench]) -> Vec<f32> {
            state.positions.clone()
        }
    }

    #[test]
    fn oracle_solve_and_dof() {
        let oracle = EchoOracle { dof: 3 };
        assert_eq!(oracle.dof(), 3);

        let state = JointState::at_rest(&[1.0, 2.0, 3.0]);
        let torques = oracle.solve(&state, &Wrench::zero_set(3));
        assert_eq!(torques, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn oracle_default_name_is_type_name() {
        let oracle = EchoOracle { dof: 1 };
        assert!(oracle.name().contains("EchoOracle"));
    }

    #[test]
    fn oracle_is_object_safe() {
        let oracle: Box<dyn InverseDynamics> = Box::new(EchoOracle { dof: 2 });
        assert_eq!(oracle.dof(), 2);
    }
}
