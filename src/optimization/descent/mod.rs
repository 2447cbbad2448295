//! descent — clipped first-order minimizers for trajectory tensors.
//!
//! Purpose
//! -------
//! Provide the two gradient-descent drivers used for swarm trajectory
//! planning: classical momentum descent ([`momentum_descent`]) and Adam with
//! constant-denominator bias correction ([`adam_descent`]). Callers implement
//! a single trait, [`Objective`], over a rank-3 parameter tensor and pick a
//! driver plus its options struct.
//!
//! Key behaviors
//! -------------
//! - Minimize a scalar cost `c(x)` over tensors of shape
//!   `(agents, timesteps, dim)`; no sign flipping anywhere — objectives
//!   return the cost and its gradient directly.
//! - Evaluate the cost at the top of every iteration and stop early the
//!   moment it falls below the configured target, before spending a gradient
//!   evaluation on that iteration.
//! - Clip the tensor elementwise into `[−param_limit, +param_limit]` after
//!   every update, so intermediate and final tensors are always feasible.
//! - Normalize results into a [`DescentOutcome`] carrying the final tensor,
//!   its cost, a [`Termination`]-derived status, and evaluation counters.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`Objective::cost`] and [`Objective::gradient`] treat invalid inputs as
//!   recoverable [`OptError`] values, not panics.
//! - Tensors use the canonical aliases [`Params`] and [`Grad`]; all are
//!   assumed finite whenever descent proceeds (validated per evaluation).
//! - Options structs ([`MomentumOptions`], [`AdamOptions`]) are validated on
//!   construction and treated as internally consistent by the drivers.
//! - Exhausting the step budget is a normal termination, never an error.
//!
//! Conventions
//! -----------
//! - Iteration indices are zero-based; the Adam step-size decay
//!   `stepsize / (1 + 0.01·i)` uses the zero-based index, so the first
//!   iteration runs at the undecayed step size.
//! - Errors bubble up as [`OptResult<T>`] / [`OptError`]; this module and
//!   its children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - The swarm layer implements [`Objective`] for its trajectory cost and
//!   calls [`adam_descent`] twice per plan (coarse collision-free pass, then
//!   a fine full-gradient pass).
//! - Front-ends are expected to interact only with the re-exported surface:
//!   [`adam_descent`], [`momentum_descent`], [`Objective`], the options
//!   structs, and [`DescentOutcome`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover:
//!   - option validation and outcome invariants in [`traits`],
//!   - convergence, clipping, and bookkeeping in [`momentum`],
//!   - the constant-denominator correction and decay schedule in [`adam`].
//!
//! [`OptError`]: crate::optimization::errors::OptError
//! [`OptResult<T>`]: crate::optimization::errors::OptResult

pub mod adam;
pub mod momentum;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adam::adam_descent;
pub use self::momentum::momentum_descent;
pub use self::traits::{
    AdamOptions, DescentOutcome, MomentumOptions, Objective, Termination,
};
pub use self::types::{Cost, Grad, Params};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use swarm_trajopt::optimization::descent::prelude::*;
//
// to import the main descent surface in a single line.

pub mod prelude {
    pub use super::adam::adam_descent;
    pub use super::momentum::momentum_descent;
    pub use super::traits::{AdamOptions, DescentOutcome, MomentumOptions, Objective, Termination};
    pub use super::types::{Cost, Grad, Params};
}
