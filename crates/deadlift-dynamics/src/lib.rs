//! Serial-chain dynamics for deadlift robots.
//!
//! Provides kinematic chain extraction from URDF robot models and a
//! recursive Newton-Euler inverse-dynamics solver over that chain.
//!
//! # Architecture
//!
//! ```text
//! RobotModel + GroupSpec ──► SerialChain ──► RneSolver ──► joint torques
//! ```
//!
//! The [`SerialChain`] is extracted from a
//! [`RobotModel`](deadlift_urdf::RobotModel) at initialization time and
//! validated to be a single unbranched base-to-tip sequence. The
//! [`RneSolver`] then implements the
//! [`InverseDynamics`](deadlift_core::InverseDynamics) capability over it:
//! joint state plus per-joint external wrenches in, required joint
//! torques out.

pub mod chain;
pub mod inertia;
pub mod rne;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use chain::{ChainJoint, SerialChain};
pub use inertia::LinkInertia;
pub use rne::RneSolver;
