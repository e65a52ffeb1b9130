//! The payload estimator.
//!
//! Combines per-joint effort limits with two inverse-dynamics queries —
//! one unloaded, one with a reference force at the tip — to bound the
//! static payload a chain can hold, and to find the uniform scale factor
//! an existing load's torques admit.

use nalgebra::Vector3;
use tracing::debug;

use deadlift_core::config::{CombinePolicy, EstimatorConfig};
use deadlift_core::error::{DimensionError, EstimatorError};
use deadlift_core::traits::InverseDynamics;
use deadlift_core::types::{JointState, Wrench};
use deadlift_dynamics::{RneSolver, SerialChain};
use deadlift_urdf::RobotModel;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Result of a payload estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadEstimate {
    /// Maximum admissible payload, in the units of the reference force.
    pub payload: f32,
    /// The joint that saturates first. Populated only under
    /// [`CombinePolicy::MostRestrictive`]; the historical combination
    /// never reports one.
    pub saturated_joint: Option<usize>,
}

/// Result of a saturation-multiplier search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueMultiplier {
    /// Largest uniform factor the load's torques can be scaled by before
    /// a joint exceeds its remaining headroom. `1.0` when nothing loads
    /// any joint.
    pub multiplier: f32,
    /// The joint that limits the multiplier, if any did.
    pub saturated_joint: Option<usize>,
}

// ---------------------------------------------------------------------------
// PayloadEstimator
// ---------------------------------------------------------------------------

/// Bounds the static payload a serial chain can hold without exceeding
/// any joint's effort limit.
///
/// Immutable once built: every query is a pure function of its inputs
/// plus the stored limits and oracle, so concurrent use needs no locking.
pub struct PayloadEstimator<S: InverseDynamics> {
    oracle: S,
    torque_limits: Vec<f32>,
    combine: CombinePolicy,
    reference_load: f32,
}

impl PayloadEstimator<RneSolver> {
    /// Build an estimator for a named joint group of `model`, backed by
    /// the recursive Newton-Euler solver.
    ///
    /// # Errors
    ///
    /// [`ConfigError`](deadlift_core::error::ConfigError) when the group
    /// is unknown, empty, or names missing joints;
    /// [`TopologyError`](deadlift_core::error::TopologyError) when the
    /// group is not a single unbranched chain. Either way no estimator is
    /// produced.
    pub fn from_model(
        model: &RobotModel,
        config: &EstimatorConfig,
        group_name: &str,
    ) -> Result<Self, EstimatorError> {
        let spec = config.group(group_name)?;
        let chain = SerialChain::from_group(model, group_name, spec)?;
        let torque_limits = chain.effort_limits();
        let gravity = Vector3::new(config.gravity[0], config.gravity[1], config.gravity[2]);
        let estimator = Self::new(RneSolver::new(chain, gravity), torque_limits)?;
        Ok(estimator
            .with_combine_policy(config.combine)
            .with_reference_load(config.reference_load))
    }
}

impl<S: InverseDynamics> PayloadEstimator<S> {
    /// Build an estimator from any oracle and matching per-joint torque
    /// limits. Combination defaults to the historical
    /// [`CombinePolicy::LeastRestrictive`] with a unit reference load.
    ///
    /// # Errors
    ///
    /// [`DimensionError::TorqueLimits`] when the limit count differs from
    /// the oracle's degree-of-freedom count.
    pub fn new(oracle: S, torque_limits: Vec<f32>) -> Result<Self, DimensionError> {
        if torque_limits.len() != oracle.dof() {
            return Err(DimensionError::TorqueLimits {
                expected: oracle.dof(),
                got: torque_limits.len(),
            });
        }
        Ok(Self {
            oracle,
            torque_limits,
            combine: CombinePolicy::default(),
            reference_load: 1.0,
        })
    }

    /// Select how per-joint bounds combine into the final estimate.
    #[must_use]
    pub fn with_combine_policy(mut self, combine: CombinePolicy) -> Self {
        self.combine = combine;
        self
    }

    /// Set the magnitude of the tip reference force (N).
    #[must_use]
    pub fn with_reference_load(mut self, reference_load: f32) -> Self {
        self.reference_load = reference_load;
        self
    }

    /// Number of joints.
    pub fn dof(&self) -> usize {
        self.torque_limits.len()
    }

    /// Per-joint effort limits in chain order.
    pub fn torque_limits(&self) -> &[f32] {
        &self.torque_limits
    }

    /// The active combination policy.
    pub const fn combine_policy(&self) -> CombinePolicy {
        self.combine
    }

    /// The injected inverse-dynamics oracle.
    pub const fn oracle(&self) -> &S {
        &self.oracle
    }

    /// Compute the torque every joint must exert for the given state and
    /// external wrenches.
    ///
    /// Validates that every input has exactly one entry per joint, then
    /// delegates to the oracle. The result is returned untouched: no
    /// clamping against limits.
    ///
    /// # Errors
    ///
    /// The [`DimensionError`] variant naming the first malformed argument;
    /// no torque vector is produced alongside it.
    pub fn torques(
        &self,
        state: &JointState,
        wrenches: &[Wrench],
    ) -> Result<Vec<f32>, DimensionError> {
        let n = self.dof();
        if state.positions.len() != n {
            return Err(DimensionError::Positions {
                expected: n,
                got: state.positions.len(),
            });
        }
        if state.velocities.len() != n {
            return Err(DimensionError::Velocities {
                expected: n,
                got: state.velocities.len(),
            });
        }
        if state.accelerations.len() != n {
            return Err(DimensionError::Accelerations {
                expected: n,
                got: state.accelerations.len(),
            });
        }
        if wrenches.len() != n {
            return Err(DimensionError::Wrenches {
                expected: n,
                got: wrenches.len(),
            });
        }
        Ok(self.oracle.solve(state, wrenches))
    }

    /// Estimate the largest payload the chain can hold at `positions`,
    /// applied as a pure force along the tip frame's +z axis. The analysis
    /// is quasi-static: velocities and accelerations are taken as zero.
    ///
    /// Each joint's admissible payload is the torque headroom left after
    /// holding the chain's own weight, divided by the torque the reference
    /// load adds per unit of force. Joints the tip force does not load at
    /// all impose no bound and are skipped. Per-joint bounds then combine
    /// according to the configured [`CombinePolicy`].
    ///
    /// # Errors
    ///
    /// [`DimensionError::Positions`] when `positions` does not have one
    /// entry per joint.
    #[allow(clippy::float_cmp)]
    pub fn max_payload(&self, positions: &[f32]) -> Result<PayloadEstimate, DimensionError> {
        let n = self.dof();
        if positions.len() != n {
            return Err(DimensionError::Positions {
                expected: n,
                got: positions.len(),
            });
        }

        let state = JointState::at_rest(positions);
        let zero_torques = self.torques(&state, &Wrench::zero_set(n))?;

        let mut wrenches = Wrench::zero_set(n);
        let Some(tip) = wrenches.last_mut() else {
            return Ok(PayloadEstimate {
                payload: 0.0,
                saturated_joint: None,
            });
        };
        *tip = Wrench::tip_load(self.reference_load);
        let load_torques = self.torques(&state, &wrenches)?;

        let mut best: Option<(f32, usize)> = None;
        for i in 0..n {
            let delta = load_torques[i] - zero_torques[i];
            if delta == 0.0 {
                // The tip force does not load this joint; it bounds nothing.
                debug!("joint {i}: unloaded by the tip force, skipped");
                continue;
            }
            let per_unit = delta / self.reference_load;
            let headroom = (self.torque_limits[i] - zero_torques[i])
                .max(-self.torque_limits[i] - zero_torques[i]);
            let bound = (headroom / per_unit).abs();
            debug!(
                "joint {i}: torque {:.4}, limit {:.4}, holding {:.4}, payload bound {bound:.4}",
                load_torques[i], self.torque_limits[i], zero_torques[i]
            );

            let better = match (self.combine, &best) {
                (_, None) => true,
                (CombinePolicy::LeastRestrictive, Some((b, _))) => bound > *b,
                (CombinePolicy::MostRestrictive, Some((b, _))) => bound < *b,
            };
            if better {
                best = Some((bound, i));
            }
        }

        Ok(match best {
            None => PayloadEstimate {
                payload: 0.0,
                saturated_joint: None,
            },
            Some((payload, joint)) => PayloadEstimate {
                payload,
                saturated_joint: match self.combine {
                    CombinePolicy::LeastRestrictive => None,
                    CombinePolicy::MostRestrictive => Some(joint),
                },
            },
        })
    }

    /// Find the largest uniform factor by which an existing load's torques
    /// can be scaled before a joint exceeds its remaining headroom
    /// `|limit| - |holding torque|`, and which joint limits it.
    ///
    /// Distinct from [`max_payload`](Self::max_payload): this rescales a
    /// torque vector already produced under some load rather than bounding
    /// a fresh tip force.
    ///
    /// # Errors
    ///
    /// [`DimensionError::Torques`] / [`DimensionError::ZeroTorques`] when
    /// either vector does not have one entry per joint.
    #[allow(clippy::float_cmp)]
    pub fn max_torque_multiplier(
        &self,
        torques: &[f32],
        zero_torques: &[f32],
    ) -> Result<TorqueMultiplier, DimensionError> {
        let n = self.dof();
        if torques.len() != n {
            return Err(DimensionError::Torques {
                expected: n,
                got: torques.len(),
            });
        }
        if zero_torques.len() != n {
            return Err(DimensionError::ZeroTorques {
                expected: n,
                got: zero_torques.len(),
            });
        }

        let mut worst_ratio = 0.0_f32;
        let mut saturated = 0_usize;
        for i in 0..n {
            let remaining = self.torque_limits[i].abs() - zero_torques[i].abs();
            let ratio = (torques[i] / remaining).abs();
            if ratio > worst_ratio {
                worst_ratio = ratio;
                saturated = i;
            }
        }

        Ok(if worst_ratio == 0.0 {
            TorqueMultiplier {
                multiplier: 1.0,
                saturated_joint: None,
            }
        } else {
            TorqueMultiplier {
                multiplier: worst_ratio.recip(),
                saturated_joint: Some(saturated),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
