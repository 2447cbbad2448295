//! Boundary conditions for swarm trajectories.
//!
//! Purpose
//! -------
//! Provide a validated container for the four per-agent boundary arrays a
//! trajectory problem needs: start velocity, start position, target
//! velocity, and target position. This module centralizes input validation
//! so the integrator and objective can assume clean, well-shaped data.
//!
//! Key behaviors
//! -------------
//! - [`BoundaryConditions`] enforces that every array is `(agents, dim)`
//!   for the problem's [`SwarmShape`] and contains only finite entries.
//!
//! Invariants & assumptions
//! ------------------------
//! - All four arrays share the `(agents, dim)` shape of the problem.
//! - Every entry is finite.
//!
//! Conventions
//! -----------
//! - Row `a` of each array belongs to agent `a`; columns are spatial
//!   coordinates.
//! - Start arrays pin trajectory sample 0 exactly; target arrays enter the
//!   objective only through the terminal sample.
//!
//! Downstream usage
//! ----------------
//! - Construct [`BoundaryConditions`] wherever raw boundary data enters the
//!   engine (Rust callers or the Python binding layer).
//! - The integrator and objective rely on these invariants and do not
//!   re-validate finiteness.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior (happy path, shape mismatch,
//!   and non-finite entries, each naming the offending array).
use crate::swarm::{
    core::{shape::SwarmShape, validation::validate_agent_matrix},
    errors::SwarmResult,
};
use ndarray::Array2;

/// Validated start and target states for every agent.
///
/// Fields
/// ------
/// - `start_vel`: `(agents, dim)` velocities at sample 0.
/// - `start_pos`: `(agents, dim)` positions at sample 0.
/// - `target_vel`: `(agents, dim)` desired terminal velocities.
/// - `target_pos`: `(agents, dim)` desired terminal positions.
///
/// Invariants
/// ----------
/// - All arrays match the problem's `(agents, dim)` and are finite;
///   enforced by [`BoundaryConditions::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryConditions {
    /// Per-agent velocity at sample 0.
    pub start_vel: Array2<f64>,
    /// Per-agent position at sample 0.
    pub start_pos: Array2<f64>,
    /// Per-agent desired terminal velocity.
    pub target_vel: Array2<f64>,
    /// Per-agent desired terminal position.
    pub target_pos: Array2<f64>,
}

impl BoundaryConditions {
    /// Construct validated [`BoundaryConditions`] for a problem shape.
    ///
    /// Validation runs per array in the order `start_vel`, `start_pos`,
    /// `target_vel`, `target_pos`, stopping at the first failure.
    ///
    /// # Errors
    /// - [`SwarmError::BoundaryShapeMismatch`] naming the first array whose
    ///   shape is not `(agents, dim)`.
    /// - [`SwarmError::NonFiniteBoundary`] naming the first array with a
    ///   NaN/±inf entry and its index.
    ///
    /// [`SwarmError::BoundaryShapeMismatch`]: crate::swarm::errors::SwarmError::BoundaryShapeMismatch
    /// [`SwarmError::NonFiniteBoundary`]: crate::swarm::errors::SwarmError::NonFiniteBoundary
    pub fn new(
        start_vel: Array2<f64>, start_pos: Array2<f64>, target_vel: Array2<f64>,
        target_pos: Array2<f64>, shape: &SwarmShape,
    ) -> SwarmResult<Self> {
        let expected = shape.boundary_dim();
        validate_agent_matrix("start_vel", &start_vel, expected)?;
        validate_agent_matrix("start_pos", &start_pos, expected)?;
        validate_agent_matrix("target_vel", &target_vel, expected)?;
        validate_agent_matrix("target_pos", &target_pos, expected)?;
        Ok(BoundaryConditions { start_vel, start_pos, target_vel, target_pos })
    }
}
