//! core — shared swarm data, kinematics, and validation.
//!
//! Purpose
//! -------
//! Collect the core building blocks for multi-agent minimum-jerk trajectory
//! problems: problem dimensions, boundary-condition containers, cost
//! weights, lag-coefficient tables, the closed-form trajectory integrator,
//! and validation helpers. The objective and planner layers build on top of
//! these primitives.
//!
//! Key behaviors
//! -------------
//! - Define problem configuration types ([`SwarmShape`], [`CostWeights`])
//!   plus the validated boundary container ([`BoundaryConditions`]).
//! - Precompute the lag-indexed triple-integration coefficients
//!   ([`LagCoefficients`]) shared by the integrator and the analytic
//!   gradients.
//! - Roll jerk tensors into velocity/position trajectories
//!   ([`integrate_trajectories`], [`Trajectories`]) and report the swarm's
//!   closest approach ([`MinSeparation`]).
//! - Centralize shape/finiteness validation for boundary arrays and jerk
//!   tensors ([`validation`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Shapes are validated once via [`SwarmShape`]; all arrays passing the
//!   validators match it and contain only finite entries.
//! - Trajectory sample 0 is always the start state; the final jerk column
//!   is inert by construction.
//! - The integrator assumes pre-validated inputs and performs no checks of
//!   its own.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. Jerk tensors and trajectory arrays are
//!   `(agents, timesteps, dim)`; boundary arrays are `(agents, dim)`.
//! - This module avoids I/O and logging; it operates purely on `ndarray`
//!   containers. Error conditions are reported via `SwarmResult`.
//!
//! Downstream usage
//! ----------------
//! - The objective layer composes these pieces: it validates jerks, calls
//!   [`integrate_trajectories`], and reads the lag tables for gradient
//!   coefficients.
//! - The planner and Python bindings surface [`Trajectories`] and
//!   [`MinSeparation`] as diagnostics.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover constructor validation, the
//!   coefficient closed forms, ballistic/impulse integration, the stepwise
//!   kinematic identities, and the separation diagnostic.

pub mod boundary;
pub mod coefficients;
pub mod integrator;
pub mod shape;
pub mod validation;
pub mod weights;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::boundary::BoundaryConditions;
pub use self::coefficients::LagCoefficients;
pub use self::integrator::{integrate_trajectories, MinSeparation, Trajectories};
pub use self::shape::SwarmShape;
pub use self::validation::{validate_agent_matrix, validate_jerk_tensor};
pub use self::weights::CostWeights;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use swarm_trajopt::swarm::core::prelude::*;
//
// to import the main swarm core surface in a single line.

pub mod prelude {
    pub use super::boundary::BoundaryConditions;
    pub use super::coefficients::LagCoefficients;
    pub use super::integrator::{integrate_trajectories, MinSeparation, Trajectories};
    pub use super::shape::SwarmShape;
    pub use super::weights::CostWeights;
}
