//! Shared validation helpers for swarm inputs.
//!
//! These run at the engine boundary, once per constructor or evaluation, so
//! the numeric core can assume well-shaped, finite arrays:
//! - [`validate_agent_matrix`]: shape and finiteness of an `(agents, dim)`
//!   boundary array.
//! - [`validate_jerk_tensor`]: shape and finiteness of an
//!   `(agents, timesteps, dim)` jerk tensor.
use crate::swarm::errors::{SwarmError, SwarmResult};
use ndarray::{Array2, Array3};

/// Validate a per-agent boundary array against the expected `(agents, dim)`
/// shape and check every entry for finiteness.
///
/// `name` identifies the array in error messages (for example
/// `"start_pos"`).
///
/// # Errors
/// - [`SwarmError::BoundaryShapeMismatch`] if the shape differs.
/// - [`SwarmError::NonFiniteBoundary`] at the first NaN/±inf entry.
pub fn validate_agent_matrix(
    name: &'static str, matrix: &Array2<f64>, expected: (usize, usize),
) -> SwarmResult<()> {
    if matrix.dim() != expected {
        return Err(SwarmError::BoundaryShapeMismatch {
            name,
            expected,
            found: matrix.dim(),
        });
    }
    for (index, &value) in matrix.indexed_iter() {
        if !value.is_finite() {
            return Err(SwarmError::NonFiniteBoundary { name, index, value });
        }
    }
    Ok(())
}

/// Validate a jerk tensor against the expected `(agents, timesteps, dim)`
/// shape and check every entry for finiteness.
///
/// # Errors
/// - [`SwarmError::JerkShapeMismatch`] if the shape differs.
/// - [`SwarmError::NonFiniteJerk`] at the first NaN/±inf entry.
pub fn validate_jerk_tensor(
    jerks: &Array3<f64>, expected: (usize, usize, usize),
) -> SwarmResult<()> {
    if jerks.dim() != expected {
        return Err(SwarmError::JerkShapeMismatch { expected, found: jerks.dim() });
    }
    for (index, &value) in jerks.indexed_iter() {
        if !value.is_finite() {
            return Err(SwarmError::NonFiniteJerk { index, value });
        }
    }
    Ok(())
}
