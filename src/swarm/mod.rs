//! swarm — multi-agent minimum-jerk planning: core kinematics, the cost
//! engine, the two-phase planner, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive swarm-planning layer that bundles validated problem
//! types, the closed-form trajectory integrator, the cost-and-gradient
//! engine, formation helpers, and the two-phase warm-start planner under a
//! single namespace. This is the main entry point for trajectory planning
//! in the crate, and the surface most consumers (including Python bindings)
//! should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect structural and numerical building blocks in [`core`]: problem
//!   shapes, boundary-condition containers, cost weights, lag-coefficient
//!   tables, the integrator, and validation helpers.
//! - Expose the cost-and-gradient engine in [`models`] via
//!   [`SwarmObjective`], which implements the generic descent `Objective`
//!   trait and offers the collision-free gradient behind
//!   [`WithoutCollisions`].
//! - Package the standard optimization schedule in [`planner`]: a coarse
//!   collision-blind Adam run warm-starting a fine full-gradient run,
//!   returning per-phase outcomes plus the final trajectories.
//! - Build start/target matrices for the reference circle scenarios in
//!   [`formations`].
//! - Centralize swarm-specific error types in [`errors`] (`SwarmError` and
//!   the `SwarmResult` alias) so callers see a uniform error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every problem is described by a validated [`SwarmShape`]; boundary
//!   arrays are `(agents, dim)`, jerk and trajectory tensors
//!   `(agents, timesteps, dim)`, all finite.
//! - Trajectory sample 0 is the fixed start state; the final jerk column
//!   never influences the trajectory.
//! - Engines hold no mutable evaluation state; a single [`SwarmObjective`]
//!   serves any number of planning runs.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; spatial coordinates are x, y, z when `dim` is 3.
//! - The numeric core performs no logging; the drivers and the planner
//!   report progress and termination through the `log` facade.
//! - Error conditions surface as [`SwarmResult`] at construction and as
//!   driver-side results during optimization; panics indicate programming
//!   errors such as out-of-bounds indexing.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Build a [`SwarmShape`] and [`BoundaryConditions`] (for the circle
//!      scenarios, via [`circle_formation`]).
//!   2. Pick [`CostWeights`] (the default carries the reference tuning) and
//!      construct a [`SwarmObjective`] with the timestep duration.
//!   3. Call [`plan_from_rest`] with [`PlanOptions::default`], or drive
//!      `adam_descent` / `momentum_descent` directly for custom schedules.
//!   4. Read the planned jerks, trajectories, and per-phase diagnostics
//!      from the [`PlanOutcome`]; check plan safety via
//!      [`Trajectories::min_separation`].
//! - Python bindings are expected to import from this module (or its
//!   [`prelude`]) and rely on the `SwarmError` conversion into `PyErr`
//!   defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover constructor validation, the coefficient
//!   closed forms, integration identities, and the separation diagnostic.
//! - Unit tests in [`models`] pin static-scenario costs and check both
//!   gradient variants against centered finite differences.
//! - Unit tests in [`planner`] and [`formations`] cover the default
//!   schedule, phase bookkeeping, and formation geometry. The crate-level
//!   integration test runs a conflicting two-agent scenario end-to-end.

pub mod core;
pub mod errors;
pub mod formations;
pub mod models;
pub mod planner;

// ---- Re-exports (primary public surface) ----------------------------------
//
// The everyday types for setting up and running a planning problem. Lower
// level pieces (validation helpers, the raw integrator entry point) remain
// under their submodules.

pub use self::core::{
    BoundaryConditions, CostWeights, LagCoefficients, MinSeparation, SwarmShape, Trajectories,
};

pub use self::errors::{SwarmError, SwarmResult};

pub use self::formations::circle_formation;

pub use self::models::{SwarmObjective, WithoutCollisions};

pub use self::planner::{PlanOptions, PlanOutcome, plan, plan_from_rest};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use swarm_trajopt::swarm::prelude::*;
//
// to import the main planning surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        BoundaryConditions, CostWeights, MinSeparation, PlanOptions, PlanOutcome, SwarmError,
        SwarmObjective, SwarmResult, SwarmShape, Trajectories, WithoutCollisions,
        circle_formation, plan, plan_from_rest,
    };
}
