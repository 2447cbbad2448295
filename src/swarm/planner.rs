//! Two-phase warm-start planning over the generic descent drivers.
//!
//! Purpose
//! -------
//! Package the standard optimization schedule for swarm trajectories: a
//! coarse Adam run that follows the collision-free gradient (fast
//! convergence toward the boundary conditions, blind to inter-agent
//! coupling in its direction but scored on the full cost), then a fine Adam
//! run from that warm start with the full gradient and a tighter cost
//! target.
//!
//! Key behaviors
//! -------------
//! - Run [`adam_descent`] twice, wrapping the engine in
//!   [`WithoutCollisions`] for the first phase and handing its result to
//!   the second as the starting tensor.
//! - Return both per-phase [`DescentOutcome`]s plus the trajectories
//!   integrated from the final jerks, so callers can inspect convergence
//!   and plan safety without re-deriving anything.
//! - Log phase transitions and the final closest approach at `info`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The schedule is policy, not mechanism: alternative schedules remain a
//!   matter of calling the drivers directly with any [`Objective`]
//!   implementation.
//! - `PlanOptions` holds two already-validated [`AdamOptions`] bundles;
//!   the hyperparameter gate is [`AdamOptions::new`].
//! - Both phases clip parameters to their own `param_limit`; with the
//!   defaults the limits agree, so the warm start is always a feasible
//!   starting point for the fine phase.
//!
//! Downstream usage
//! ----------------
//! - Call [`plan_from_rest`] for the common zero-initialized case, or
//!   [`plan`] to continue from an existing tensor. Read the final jerks via
//!   [`PlanOutcome::jerks`] and the paths via `outcome.trajectories`.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the default schedule and exercise both the step-limit
//!   and early-stop paths through the planner on a small swarm; the
//!   integration test runs the full reference-style scenario.
//!
//! [`Objective`]: crate::optimization::descent::traits::Objective
use crate::{
    optimization::{
        descent::{
            adam::adam_descent,
            traits::{AdamOptions, DescentOutcome},
        },
        errors::OptResult,
    },
    swarm::{
        core::integrator::Trajectories,
        models::objective::{SwarmObjective, WithoutCollisions},
    },
};
use ndarray::Array3;

/// Hyperparameters for the two phases of a planning run.
///
/// Fields
/// ------
/// - `coarse`: `AdamOptions`
///   Phase 1: collision-free gradient. The default never early-stops
///   (cost target 0) and spends a short budget approaching the boundary
///   conditions.
/// - `fine`: `AdamOptions`
///   Phase 2: full gradient from the warm start, smaller steps, tighter
///   cost target, long budget.
///
/// Notes
/// -----
/// - `Default` reproduces the reference schedule: phase 1 at stepsize
///   0.01 for 50 steps, phase 2 at stepsize 0.005 for up to 4000 steps
///   with cost target 0.05; both with β₁ = 0.95, β₂ = 0.99, ε = 1e-8 and
///   parameter limit 0.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOptions {
    pub coarse: AdamOptions,
    pub fine: AdamOptions,
}

impl PlanOptions {
    /// Bundle two phase configurations. Each `AdamOptions` was validated
    /// at its own construction; nothing further is checked here.
    pub fn new(coarse: AdamOptions, fine: AdamOptions) -> Self {
        Self { coarse, fine }
    }
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            coarse: AdamOptions::default(),
            fine: AdamOptions {
                stepsize: 0.005,
                cost_target: 0.05,
                max_steps: 4000,
                ..AdamOptions::default()
            },
        }
    }
}

/// Result of a two-phase planning run.
///
/// Fields
/// ------
/// - `trajectories`: `Trajectories`
///   Positions and velocities integrated from the final jerk tensor.
/// - `coarse`: `DescentOutcome`
///   Phase 1 outcome, including the warm-start tensor it produced.
/// - `fine`: `DescentOutcome`
///   Phase 2 outcome; its `params_hat` is the plan's jerk tensor and its
///   `cost` is the cost of exactly that tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub trajectories: Trajectories,
    pub coarse: DescentOutcome,
    pub fine: DescentOutcome,
}

impl PlanOutcome {
    /// The planned jerk tensor, `(agents, timesteps, dim)`.
    pub fn jerks(&self) -> &Array3<f64> {
        &self.fine.params_hat
    }
}

/// Run the two-phase schedule from a caller-supplied starting tensor.
///
/// Parameters
/// ----------
/// - `objective`: `&SwarmObjective`
///   The engine to optimize against; reused by both phases.
/// - `init_jerks`: `Array3<f64>`
///   Starting tensor, shape `objective.shape.jerk_dim()`. Checked by the
///   first driver call before any iteration runs.
/// - `options`: `&PlanOptions`
///   Per-phase hyperparameters.
///
/// Returns
/// -------
/// `OptResult<PlanOutcome>`
///   Both phase outcomes plus the trajectories of the final tensor.
///   Hitting a step limit is a normal termination, not an error.
///
/// Errors
/// ------
/// - `OptError`
///   Propagated from the drivers when the starting tensor fails the
///   engine's `check` or an evaluation yields a non-finite cost/gradient.
pub fn plan(
    objective: &SwarmObjective, init_jerks: Array3<f64>, options: &PlanOptions,
) -> OptResult<PlanOutcome> {
    log::info!(
        "phase 1: collision-free gradient, stepsize {}, budget {}",
        options.coarse.stepsize,
        options.coarse.max_steps
    );
    let coarse = adam_descent(&WithoutCollisions(objective), init_jerks, &options.coarse)?;

    log::info!(
        "phase 1 finished after {} iterations at cost {:.6e}; phase 2: full gradient, stepsize {}, budget {}",
        coarse.iterations,
        coarse.cost,
        options.fine.stepsize,
        options.fine.max_steps
    );
    let fine = adam_descent(objective, coarse.params_hat.clone(), &options.fine)?;
    let trajectories = objective.trajectories(&fine.params_hat)?;

    match trajectories.min_separation() {
        Some(closest) => log::info!(
            "phase 2 finished after {} iterations at cost {:.6e}; closest approach {:.4} between agents {} and {} at step {}",
            fine.iterations,
            fine.cost,
            closest.distance,
            closest.pair.0,
            closest.pair.1,
            closest.step
        ),
        None => log::info!(
            "phase 2 finished after {} iterations at cost {:.6e}",
            fine.iterations,
            fine.cost
        ),
    }
    Ok(PlanOutcome { trajectories, coarse, fine })
}

/// Run the two-phase schedule from a zero jerk tensor.
///
/// The usual entry point: agents start the optimization on their ballistic
/// (jerk-free) trajectories and the schedule shapes them from there.
pub fn plan_from_rest(objective: &SwarmObjective, options: &PlanOptions) -> OptResult<PlanOutcome> {
    plan(objective, Array3::zeros(objective.shape.jerk_dim()), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swarm::core::{
        boundary::BoundaryConditions, shape::SwarmShape, weights::CostWeights,
    };
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The default two-phase schedule values.
    // - Phase bookkeeping on the step-limit path (budgets exhausted, final
    //   cost matching the returned tensor).
    // - The early-stop path and zero initialization of `plan_from_rest`.
    //
    // They intentionally DO NOT cover:
    // - Convergence quality of the reference scenario (integration test).
    // -------------------------------------------------------------------------

    /// Small separated two-agent problem: cheap to evaluate, collision term
    /// never active, but nonzero cost because the targets are offset.
    fn drift_objective() -> SwarmObjective {
        let shape = SwarmShape::new(2, 4, 3).unwrap();
        let boundary = BoundaryConditions::new(
            Array2::zeros((2, 3)),
            array![[0.0, 0.0, 1.0], [0.0, 50.0, 1.0]],
            Array2::zeros((2, 3)),
            array![[0.2, 0.0, 1.0], [0.0, 50.2, 1.0]],
            &shape,
        )
        .unwrap();
        SwarmObjective::new(shape, boundary, CostWeights::default(), 0.5).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The default options reproduce the reference schedule.
    //
    // Given
    // -----
    // - `PlanOptions::default()`.
    //
    // Expect
    // ------
    // - Phase 1: stepsize 0.01, budget 50, cost target 0 (never stops
    //   early), limit 0.1.
    // - Phase 2: stepsize 0.005, budget 4000, cost target 0.05, limit 0.1.
    // - Both phases share β₁ = 0.95, β₂ = 0.99, ε = 1e-8.
    fn default_options_match_reference_schedule() {
        // Act
        let options = PlanOptions::default();

        // Assert
        assert_eq!(options.coarse.stepsize, 0.01);
        assert_eq!(options.coarse.max_steps, 50);
        assert_eq!(options.coarse.cost_target, 0.0);
        assert_eq!(options.fine.stepsize, 0.005);
        assert_eq!(options.fine.max_steps, 4000);
        assert_eq!(options.fine.cost_target, 0.05);
        for phase in [options.coarse, options.fine] {
            assert_eq!(phase.beta1, 0.95);
            assert_eq!(phase.beta2, 0.99);
            assert_eq!(phase.epsilon, 1e-8);
            assert_eq!(phase.param_limit, 0.1);
        }
    }

    #[test]
    // Purpose
    // -------
    // With unreachable cost targets both phases run their full budgets, and
    // the outcome's cost belongs to the tensor it returns.
    //
    // Given
    // -----
    // - The drift scenario and tiny budgets (3 and 4 steps) with cost
    //   target 0.
    //
    // Expect
    // ------
    // - `coarse.iterations == 3`, `fine.iterations == 4`, neither
    //   converged.
    // - `fine.cost` equals `objective.cost(outcome.jerks())` exactly.
    // - Every jerk entry respects the clipping limit.
    fn step_limited_phases_report_the_returned_tensor() {
        // Arrange
        let objective = drift_objective();
        let options = PlanOptions {
            coarse: AdamOptions { max_steps: 3, ..AdamOptions::default() },
            fine: AdamOptions { stepsize: 0.005, max_steps: 4, ..AdamOptions::default() },
        };

        // Act
        let outcome = plan_from_rest(&objective, &options).unwrap();

        // Assert
        assert_eq!(outcome.coarse.iterations, 3);
        assert!(!outcome.coarse.converged);
        assert_eq!(outcome.fine.iterations, 4);
        assert!(!outcome.fine.converged);
        let recomputed = objective.cost(outcome.jerks()).unwrap();
        assert_eq!(outcome.fine.cost, recomputed);
        let limit = options.fine.param_limit;
        assert!(outcome.jerks().iter().all(|j| j.abs() <= limit));
    }

    #[test]
    // Purpose
    // -------
    // A cost target above the zero-jerk cost stops both phases on iteration
    // 0, so `plan_from_rest` returns the untouched zero tensor.
    //
    // Given
    // -----
    // - The drift scenario, whose zero-jerk cost is finite, and phase
    //   targets far above it.
    //
    // Expect
    // ------
    // - Both phases converge with 0 iterations.
    // - The planned jerks are exactly zero and the trajectories match a
    //   direct integration of the zero tensor.
    fn generous_targets_return_the_initial_tensor() {
        // Arrange
        let objective = drift_objective();
        let generous = 1e6;
        let options = PlanOptions {
            coarse: AdamOptions { cost_target: generous, ..AdamOptions::default() },
            fine: AdamOptions { cost_target: generous, ..AdamOptions::default() },
        };

        // Act
        let outcome = plan_from_rest(&objective, &options).unwrap();

        // Assert
        assert!(outcome.coarse.converged);
        assert_eq!(outcome.coarse.iterations, 0);
        assert!(outcome.fine.converged);
        assert_eq!(outcome.fine.iterations, 0);
        assert!(outcome.jerks().iter().all(|j| *j == 0.0));
        let zeros = Array3::zeros(objective.shape.jerk_dim());
        assert_eq!(outcome.trajectories, objective.trajectories(&zeros).unwrap());
    }
}
