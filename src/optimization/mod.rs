//! optimization — descent drivers, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for trajectory planning, combining
//! clipped first-order descent drivers, shared numerical guards, and a
//! single error/result surface. Callers implement an objective over a
//! rank-3 tensor, choose a driver and options, and obtain a minimized
//! tensor plus diagnostics without touching driver internals.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing tensor costs** `c(x)`
//!   (`descent`), including momentum and Adam drivers with early stopping
//!   and elementwise clipping.
//! - Supply shared numerical primitives (`numerical_stability`) guarding
//!   the near-singular geometry of pairwise collision terms.
//! - Normalize configuration issues, numerical failures, and swarm-layer
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Drivers operate on rank-3 tensors and assume entries are finite once
//!   validation has passed; invalid states are reported as `OptError`, not
//!   panics.
//! - Objective implementations are expected to treat domain violations
//!   (wrong shapes, non-finite entries) as recoverable errors surfaced
//!   through the optimization layer.
//!
//! Conventions
//! -----------
//! - All drivers minimize the cost directly; no maximize/minimize sign
//!   flipping exists anywhere in the crate.
//! - Parameters and gradients are represented using `ndarray`-based
//!   aliases (`Params`, `Grad`); clipping keeps every accepted tensor
//!   inside `[−param_limit, +param_limit]`.
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see model-specific error enums.
//! - Drivers log per-iteration costs at debug level and termination causes
//!   at info level through the `log` facade; they perform no other I/O.
//!
//! Downstream usage
//! ----------------
//! - The swarm layer implements `Objective` for its trajectory cost and
//!   calls `adam_descent` per planning phase to obtain a `DescentOutcome`.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the submodule preludes and
//!   the core error types, or they depend directly on `descent::prelude` /
//!   `numerical_stability::prelude` when they want a more fine-grained
//!   split.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns:
//!   - `descent`: option validation, convergence, clipping, early-stop
//!     bookkeeping, and the constant-denominator Adam correction on toy
//!     objectives.
//!   - `errors`: conversions from swarm-layer errors into `OptError`.
//! - Higher-level integration tests exercise end-to-end planning
//!   workflows, verifying that configuration mistakes and numerical
//!   problems surface as sensible `OptError` values and that successful
//!   runs produce stable `DescentOutcome`s.

pub mod descent;
pub mod errors;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use swarm_trajopt::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::descent::prelude::*;
    pub use super::errors::{OptError, OptResult};
    pub use super::numerical_stability::prelude::*;
}
