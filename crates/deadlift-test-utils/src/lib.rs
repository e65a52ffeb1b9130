//! Shared test fixtures and utilities for deadlift crates.
//!
//! Provides deterministic [`InverseDynamics`](deadlift_core::InverseDynamics)
//! test doubles and reusable URDF robot fixtures.

pub mod fixtures;
pub mod mocks;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use mocks::{ConstantOracle, LinearOracle};
