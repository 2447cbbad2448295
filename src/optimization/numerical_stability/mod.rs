//! numerical_stability — numerically robust helpers for near-singular geometry.
//!
//! Purpose
//! -------
//! Centralize the small numeric guards the optimization and swarm layers
//! share, chiefly the separation floor that keeps collision-direction
//! normalization well-conditioned when agents pass arbitrarily close to
//! each other.
//!
//! Key behaviors
//! ------------
//! - Expose [`SEPARATION_FLOOR`] as the single source of truth for the
//!   minimum separation used as a divisor anywhere in the crate.
//! - Provide [`floor_separation`] to clamp raw distances before they enter
//!   a denominator, leaving activation tests and penalty magnitudes on the
//!   raw distance.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite `f64` distances produced by upstream-validated
//!   trajectories; this module performs no validation of its own.
//! - The floor affects only direction normalization. Whether a collision
//!   term fires, and how strongly, is always decided on the raw distance.
//!
//! Downstream usage
//! ----------------
//! - The swarm objective calls [`floor_separation`] when converting a
//!   pairwise position difference into a unit direction for the collision
//!   gradient.
//!
//! Testing notes
//! -------------
//! - The coincident-agent and near-miss cases are exercised in the swarm
//!   objective's unit tests, where the floor's effect on gradients is
//!   observable end to end.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{SEPARATION_FLOOR, floor_separation};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use swarm_trajopt::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{SEPARATION_FLOOR, floor_separation};
}
