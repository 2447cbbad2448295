//! ## Purpose
//! Precompute the lag-indexed integration coefficients shared by the
//! trajectory integrator and the analytic gradients.
//!
//! ## Background
//! With piecewise-constant jerk held for `dt` per step, triple integration
//! gives closed forms in the lag `ℓ = k − i` between the sample being
//! computed and the jerk column acting on it:
//!
//! - velocity:  `dt² · (ℓ + 0.5)`
//! - position:  `0.5 · dt³ · (ℓ² + ℓ + 1/3)`
//!
//! The `1/3` is exact, the tail of `∫∫∫ 1 = s³/6` over one step, not a
//! rounded decimal. Both the integrator and the cost gradients read these
//! tables, so sensitivities agree with the dynamics to machine precision.
use crate::swarm::errors::{SwarmError, SwarmResult};
use ndarray::Array1;

/// Lag-indexed velocity and position coefficients plus the timestep.
///
/// `vel[ℓ]` and `pos[ℓ]` hold the contribution of a jerk column at lag `ℓ`,
/// for `ℓ` in `0..=timesteps − 2` (the largest lag any sample can see).
#[derive(Debug, Clone, PartialEq)]
pub struct LagCoefficients {
    /// Step duration in seconds.
    pub dt: f64,
    /// `vel[ℓ] = dt² · (ℓ + 0.5)`.
    pub vel: Array1<f64>,
    /// `pos[ℓ] = 0.5 · dt³ · (ℓ² + ℓ + 1/3)`.
    pub pos: Array1<f64>,
}

impl LagCoefficients {
    /// Build coefficient tables for a problem with `timesteps` samples.
    ///
    /// # Errors
    /// - [`SwarmError::InvalidTimestep`] for a non-finite or non-positive
    ///   `dt`.
    /// - [`SwarmError::InvalidSwarmShape`] if `timesteps < 2`.
    pub fn new(timesteps: usize, dt: f64) -> SwarmResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SwarmError::InvalidTimestep { value: dt });
        }
        if timesteps < 2 {
            return Err(SwarmError::InvalidSwarmShape {
                param: timesteps,
                reason: "At least two timesteps are required; sample 0 is the fixed start.",
            });
        }
        let lags = timesteps - 1;
        let dt2 = dt * dt;
        let half_dt3 = 0.5 * dt * dt * dt;
        let vel = Array1::from_iter((0..lags).map(|lag| dt2 * (lag as f64 + 0.5)));
        let pos = Array1::from_iter((0..lags).map(|lag| {
            let l = lag as f64;
            half_dt3 * (l * l + l + 1.0 / 3.0)
        }));
        Ok(LagCoefficients { dt, vel, pos })
    }
}
