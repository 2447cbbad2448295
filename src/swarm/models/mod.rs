//! models — the swarm cost-and-gradient engine consumed by the descent
//! drivers.
//!
//! Purpose
//! -------
//! Expose the user-facing objective for multi-agent minimum-jerk planning.
//! This layer sits on top of `swarm::core`, wiring boundary conditions, cost
//! weights, and the lag-coefficient tables into [`SwarmObjective`], which
//! implements the generic [`Objective`] trait from the optimization layer.
//!
//! Key behaviors
//! -------------
//! - Score jerk tensors (terminal boundary error + proximity penalty) and
//!   differentiate the score analytically, entry for entry.
//! - Offer the collision-free gradient variant behind the
//!   [`WithoutCollisions`] wrapper so warm-start schedules can follow the
//!   cheap direction while scoring the true objective.
//! - Surface violating pair-steps ([`PairViolation`]) for callers that want
//!   proximity diagnostics beyond the scalar cost.
//!
//! Invariants & assumptions
//! ------------------------
//! - Engines are built through validated constructors; every public
//!   evaluation re-validates its jerk tensor before integrating.
//! - Evaluations are stateless: nothing is cached between calls, so one
//!   engine instance serves any number of optimization runs.
//!
//! Downstream usage
//! ----------------
//! - Hand `&SwarmObjective` (or `WithoutCollisions(&engine)`) to
//!   `adam_descent` / `momentum_descent`, or let `swarm::planner` drive the
//!   standard two-phase schedule.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`objective`] pin static-scenario costs and check both
//!   gradient variants against centered finite differences; the planner
//!   integration test exercises the engine through the drivers end-to-end.
//!
//! [`Objective`]: crate::optimization::descent::traits::Objective

pub mod objective;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::objective::{PairViolation, SwarmObjective, WithoutCollisions};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use swarm_trajopt::swarm::models::prelude::*;
//
// to import the main engine surface in a single line.

pub mod prelude {
    pub use super::objective::{SwarmObjective, WithoutCollisions};
}
