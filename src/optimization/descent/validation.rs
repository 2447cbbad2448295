//! Validation helpers for the descent drivers.
//!
//! This module centralizes the consistency checks used across the driver
//! interface:
//!
//! - **Hyperparameter checks**: [`verify_stepsize`], [`verify_momentum`],
//!   [`verify_beta`], [`verify_epsilon`], [`verify_max_steps`],
//!   [`verify_cost_target`], [`verify_param_limit`] ensure driver options are
//!   finite and inside their admissible ranges.
//! - **Gradient validation**: [`validate_gradient`] enforces matching tensor
//!   shape and finite entries.
//! - **Outcome validation**: [`validate_params_hat`] and [`validate_cost`]
//!   check the tensor and cost a driver is about to hand back.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::optimization::{
    descent::types::{Grad, Params},
    errors::{OptError, OptResult},
};

/// Validate a step size: must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidStepsize`] if the value is non-finite or ≤ 0.0.
pub fn verify_stepsize(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidStepsize { value, reason: "Step size must be finite." });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidStepsize { value, reason: "Step size must be positive." });
    }
    Ok(())
}

/// Validate a momentum coefficient: must be finite and lie in `[0, 1)`.
///
/// # Errors
/// Returns [`OptError::InvalidMomentum`] for non-finite values or values
/// outside `[0, 1)`.
pub fn verify_momentum(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidMomentum { value, reason: "Momentum must be finite." });
    }
    if !(0.0..1.0).contains(&value) {
        return Err(OptError::InvalidMomentum { value, reason: "Momentum must lie in [0, 1)." });
    }
    Ok(())
}

/// Validate a moment-decay coefficient (β1 or β2): finite and in `[0, 1)`.
///
/// `name` is carried into the error so β1 and β2 failures stay
/// distinguishable.
///
/// # Errors
/// Returns [`OptError::InvalidBeta`] for non-finite values or values outside
/// `[0, 1)`.
pub fn verify_beta(name: &'static str, value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidBeta { name, value, reason: "Coefficient must be finite." });
    }
    if !(0.0..1.0).contains(&value) {
        return Err(OptError::InvalidBeta {
            name,
            value,
            reason: "Coefficient must lie in [0, 1).",
        });
    }
    Ok(())
}

/// Validate the Adam denominator offset ε: finite and strictly positive.
///
/// # Errors
/// Returns [`OptError::InvalidEpsilon`] if the value is non-finite or ≤ 0.0.
pub fn verify_epsilon(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidEpsilon { value, reason: "Epsilon must be finite." });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidEpsilon { value, reason: "Epsilon must be positive." });
    }
    Ok(())
}

/// Validate the iteration budget: must be greater than zero.
///
/// # Errors
/// Returns [`OptError::InvalidMaxSteps`] if `max_steps == 0`.
pub fn verify_max_steps(max_steps: usize) -> OptResult<()> {
    if max_steps == 0 {
        return Err(OptError::InvalidMaxSteps {
            max_steps,
            reason: "Iteration budget must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate a cost target: must be finite (any sign).
///
/// A target of `0.0` is admissible and, for non-negative objectives, means
/// the early stop never fires.
///
/// # Errors
/// Returns [`OptError::InvalidCostTarget`] if the value is NaN or infinite.
pub fn verify_cost_target(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidCostTarget { value, reason: "Cost target must be finite." });
    }
    Ok(())
}

/// Validate the elementwise clipping limit: finite and strictly positive.
///
/// # Errors
/// Returns [`OptError::InvalidParamLimit`] if the value is non-finite or
/// ≤ 0.0.
pub fn verify_param_limit(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidParamLimit {
            value,
            reason: "Parameter limit must be finite.",
        });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidParamLimit {
            value,
            reason: "Parameter limit must be positive.",
        });
    }
    Ok(())
}

/// Validate a gradient tensor against shape and finiteness.
///
/// Checks:
/// - `grad.dim() == shape`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::GradientShapeMismatch`] if the tensor shape does not match.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_gradient(grad: &Grad, shape: (usize, usize, usize)) -> OptResult<()> {
    if grad.dim() != shape {
        return Err(OptError::GradientShapeMismatch { expected: shape, found: grad.dim() });
    }
    for (index, &value) in grad.indexed_iter() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and pass through a final parameter tensor.
///
/// Accepts only a tensor with all **finite** entries; drivers call this on
/// the tensor they are about to return.
///
/// # Returns
/// The owned `Params` if valid.
///
/// # Errors
/// Returns [`OptError::InvalidParams`] if any element is non-finite.
pub fn validate_params_hat(params_hat: Params) -> OptResult<Params> {
    for (index, &value) in params_hat.indexed_iter() {
        if !value.is_finite() {
            return Err(OptError::InvalidParams {
                index,
                value,
                reason: "Final parameters must be finite.",
            });
        }
    }
    Ok(params_hat)
}

/// Validate that a scalar cost value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_cost(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
