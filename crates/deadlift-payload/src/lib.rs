//! Payload estimation for serial robot arms.
//!
//! Answers the question: at a given configuration, how heavy a load can
//! the arm hold at its tip before some joint runs out of torque?
//!
//! # Architecture
//!
//! ```text
//! RobotModel + EstimatorConfig ──► PayloadEstimator ──► payload bound
//!                                        │
//!                                        ▼
//!                                 InverseDynamics oracle
//! ```
//!
//! The [`PayloadEstimator`] is built once from a robot model and a named
//! joint group (or directly from torque limits plus any
//! [`InverseDynamics`](deadlift_core::InverseDynamics) implementation).
//! It queries the oracle twice per estimate — once unloaded, once with a
//! reference force at the tip — and combines the two torque vectors with
//! the per-joint effort limits.

pub mod estimator;


// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use estimator::{PayloadEstimate, PayloadEstimator, TorqueMultiplier};
