//! descent::types — shared numeric aliases for the descent drivers.
//!
//! Purpose
//! -------
//! Centralize the tensor types used by the gradient-descent drivers. By
//! defining these in one place, the driver code stays agnostic to `ndarray`
//! generics and the rest of the crate can refer to one canonical shape for
//! parameters and gradients.
//!
//! Conventions
//! -----------
//! - `Params` and `Grad` are dense rank-3 tensors indexed
//!   `(agent, timestep, dim)`; a driver never changes a tensor's shape, only
//!   its values.
//! - `Cost` is a scalar `f64` in objective space; lower is better.
//! - This module defines no runtime behavior; correctness is exercised by the
//!   driver and engine tests that instantiate these aliases.
use ndarray::Array3;

/// Parameter tensor for descent: commanded jerk per
/// `(agent, timestep, dim)`.
///
/// Alias for `ndarray::Array3<f64>`, the sole optimization variable.
pub type Params = Array3<f64>;

/// Gradient tensor `∂cost/∂params`, matching the shape of [`Params`].
pub type Grad = Array3<f64>;

/// Scalar objective value minimized by the drivers.
pub type Cost = f64;
