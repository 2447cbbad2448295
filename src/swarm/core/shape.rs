//! Problem dimensions for a swarm trajectory optimization.
//!
//! A problem is sized by three axes:
//! - `agents`: number of vehicles planned jointly.
//! - `timesteps`: number of discrete trajectory samples, including the
//!   start sample at index 0.
//! - `dim`: spatial dimensionality of positions, velocities, and jerks.
//!
//! The jerk tensor shares all three axes, `(agents, timesteps, dim)`. The
//! final jerk column exists for layout symmetry but can never influence the
//! trajectory, which ends at sample `timesteps - 1`.
use crate::swarm::errors::{SwarmError, SwarmResult};

/// Dimensions of a swarm trajectory problem.
///
/// Invariant: `agents >= 1`, `dim >= 1`, `timesteps >= 2` so that the
/// trajectory extends beyond its fixed start sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwarmShape {
    pub agents: usize,
    pub timesteps: usize,
    pub dim: usize,
}

impl SwarmShape {
    /// Construct a validated [`SwarmShape`].
    ///
    /// # Invariants
    /// - `agents >= 1`: at least one trajectory to plan.
    /// - `timesteps >= 2`: sample 0 is the fixed start, so at least one
    ///   further sample is needed for jerks to act on.
    /// - `dim >= 1`: positions need at least one coordinate.
    ///
    /// # Errors
    /// - [`SwarmError::InvalidSwarmShape`] naming the offending axis.
    pub fn new(agents: usize, timesteps: usize, dim: usize) -> SwarmResult<Self> {
        if agents == 0 {
            return Err(SwarmError::InvalidSwarmShape {
                param: agents,
                reason: "At least one agent is required.",
            });
        }
        if timesteps < 2 {
            return Err(SwarmError::InvalidSwarmShape {
                param: timesteps,
                reason: "At least two timesteps are required; sample 0 is the fixed start.",
            });
        }
        if dim == 0 {
            return Err(SwarmError::InvalidSwarmShape {
                param: dim,
                reason: "Spatial dimension must be at least one.",
            });
        }
        Ok(SwarmShape { agents, timesteps, dim })
    }

    /// Shape of the jerk tensor and of trajectory arrays:
    /// `(agents, timesteps, dim)`.
    pub fn jerk_dim(&self) -> (usize, usize, usize) {
        (self.agents, self.timesteps, self.dim)
    }

    /// Shape of per-agent boundary arrays: `(agents, dim)`.
    pub fn boundary_dim(&self) -> (usize, usize) {
        (self.agents, self.dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `SwarmShape::new` and the derived tensor
    //   shapes.
    // - Rejection of degenerate axes: no agents, a single timestep, or a
    //   zero-dimensional space.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify `SwarmShape::new` accepts the smallest admissible problem and
    // derives the tensor shapes from it.
    //
    // Given
    // -----
    // - One agent, two timesteps, one spatial dimension.
    //
    // Expect
    // ------
    // - `Ok(..)` with `jerk_dim() == (1, 2, 1)` and `boundary_dim() == (1, 1)`.
    fn swarm_shape_new_accepts_minimal_problem() {
        let shape = SwarmShape::new(1, 2, 1).unwrap();

        assert_eq!(shape.jerk_dim(), (1, 2, 1));
        assert_eq!(shape.boundary_dim(), (1, 1));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `SwarmShape::new` rejects a swarm with no agents.
    //
    // Given
    // -----
    // - `agents = 0`, other axes valid.
    //
    // Expect
    // ------
    // - `Err(SwarmError::InvalidSwarmShape { param: 0, .. })` carrying the
    //   agent-count reason.
    fn swarm_shape_new_rejects_zero_agents() {
        let result = SwarmShape::new(0, 5, 3);

        assert_eq!(
            result.unwrap_err(),
            SwarmError::InvalidSwarmShape {
                param: 0,
                reason: "At least one agent is required.",
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure `SwarmShape::new` rejects a horizon with only the fixed start
    // sample, on which no jerk could ever act.
    //
    // Given
    // -----
    // - `timesteps = 1`, other axes valid.
    //
    // Expect
    // ------
    // - `Err(SwarmError::InvalidSwarmShape { param: 1, .. })` carrying the
    //   timestep reason.
    fn swarm_shape_new_rejects_single_timestep() {
        let result = SwarmShape::new(2, 1, 3);

        assert_eq!(
            result.unwrap_err(),
            SwarmError::InvalidSwarmShape {
                param: 1,
                reason: "At least two timesteps are required; sample 0 is the fixed start.",
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure `SwarmShape::new` rejects a zero-dimensional space.
    //
    // Given
    // -----
    // - `dim = 0`, other axes valid.
    //
    // Expect
    // ------
    // - `Err(SwarmError::InvalidSwarmShape { param: 0, .. })` carrying the
    //   spatial-dimension reason.
    fn swarm_shape_new_rejects_zero_dim() {
        let result = SwarmShape::new(2, 5, 0);

        assert_eq!(
            result.unwrap_err(),
            SwarmError::InvalidSwarmShape {
                param: 0,
                reason: "Spatial dimension must be at least one.",
            }
        );
    }
}
