//! Cost weights and the separation threshold for the swarm objective.
//!
//! The objective is a weighted sum of three terms: terminal-velocity error,
//! terminal-position error, and a pairwise collision penalty that activates
//! whenever two agents come closer than `min_dist`.
use crate::swarm::errors::{SwarmError, SwarmResult};

/// Weights of the trajectory cost plus the collision threshold.
///
/// - `w_vel`: weight on squared terminal-velocity error.
/// - `w_pos`: weight on squared terminal-position error.
/// - `w_col`: weight on each active pairwise collision penalty.
/// - `min_dist`: separation threshold below which the collision penalty
///   activates; strictly positive.
///
/// A weight of zero disables its term. The default carries the reference
/// scenario's tuning: `w_vel = w_pos = 5.0`, `w_col = 0.5`,
/// `min_dist = 0.6`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostWeights {
    pub w_vel: f64,
    pub w_pos: f64,
    pub w_col: f64,
    pub min_dist: f64,
}

impl CostWeights {
    /// Construct validated [`CostWeights`].
    ///
    /// # Invariants
    /// - Each weight is finite and non-negative.
    /// - `min_dist` is finite and strictly positive.
    ///
    /// # Errors
    /// - [`SwarmError::InvalidWeight`] naming the offending weight.
    /// - [`SwarmError::InvalidMinDist`] for a bad separation threshold.
    pub fn new(w_vel: f64, w_pos: f64, w_col: f64, min_dist: f64) -> SwarmResult<Self> {
        for (name, value) in [("w_vel", w_vel), ("w_pos", w_pos), ("w_col", w_col)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SwarmError::InvalidWeight { name, value });
            }
        }
        if !min_dist.is_finite() || min_dist <= 0.0 {
            return Err(SwarmError::InvalidMinDist { value: min_dist });
        }
        Ok(CostWeights { w_vel, w_pos, w_col, min_dist })
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        CostWeights { w_vel: 5.0, w_pos: 5.0, w_col: 0.5, min_dist: 0.6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `CostWeights::new`.
    // - Rejection of negative or non-finite weights and of a non-positive
    //   separation threshold.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify `CostWeights::new` accepts the reference tuning and that the
    // `Default` impl matches it.
    //
    // Expect
    // ------
    // - `Ok(..)` equal to `CostWeights::default()`.
    fn cost_weights_new_accepts_reference_tuning() {
        let weights = CostWeights::new(5.0, 5.0, 0.5, 0.6).unwrap();

        assert_eq!(weights, CostWeights::default());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `CostWeights::new` rejects a negative weight and names it.
    //
    // Given
    // -----
    // - `w_col = -0.5`, other fields valid.
    //
    // Expect
    // ------
    // - `Err(SwarmError::InvalidWeight { name: "w_col", value: -0.5 })`.
    fn cost_weights_new_rejects_negative_weight() {
        let result = CostWeights::new(5.0, 5.0, -0.5, 0.6);

        assert_eq!(
            result.unwrap_err(),
            SwarmError::InvalidWeight { name: "w_col", value: -0.5 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure `CostWeights::new` rejects a zero separation threshold, which
    // would make the collision penalty's activation band empty and its
    // normalization ill-defined.
    //
    // Given
    // -----
    // - `min_dist = 0.0`, other fields valid.
    //
    // Expect
    // ------
    // - `Err(SwarmError::InvalidMinDist { value: 0.0 })`.
    fn cost_weights_new_rejects_zero_min_dist() {
        let result = CostWeights::new(5.0, 5.0, 0.5, 0.0);

        assert_eq!(result.unwrap_err(), SwarmError::InvalidMinDist { value: 0.0 });
    }

    #[test]
    // Purpose
    // -------
    // Verify a zero weight is accepted, since disabling a term is a
    // supported configuration.
    //
    // Given
    // -----
    // - `w_col = 0.0`, other fields from the reference tuning.
    //
    // Expect
    // ------
    // - `Ok(..)` with `w_col == 0.0`.
    fn cost_weights_new_accepts_zero_weight() {
        let weights = CostWeights::new(5.0, 5.0, 0.0, 0.6).unwrap();

        assert_eq!(weights.w_col, 0.0);
    }
}
