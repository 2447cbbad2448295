//! Swarm objective — trajectory cost and analytic gradient over jerk tensors.
//!
//! Purpose
//! -------
//! Provide the cost-and-gradient engine for multi-agent minimum-jerk
//! planning: score a candidate jerk tensor by terminal boundary error plus
//! pairwise proximity penalties, and produce the exact analytic gradient of
//! that score with respect to every jerk entry. [`SwarmObjective`] plugs
//! directly into the generic descent drivers through the
//! [`Objective`] trait.
//!
//! Key behaviors
//! -------------
//! - Integrate candidate jerks into trajectories on every evaluation via
//!   [`integrate_trajectories`]; no evaluation state is retained between
//!   calls.
//! - Compute the scalar cost as `w_vel · ‖V[last] − targetVel‖²
//!   + w_pos · ‖P[last] − targetPos‖²` summed over agents, plus
//!   `w_col · (1 − dist/min_dist)²` for every agent pair and timestep whose
//!   separation falls below `min_dist`.
//! - Differentiate both terms through the integrator's linear map using the
//!   precomputed [`LagCoefficients`] tables, with [`gradient_no_collision`]
//!   exposing the terminal-only variant used by the warm-start phase.
//! - Traverse violating pair-steps via [`walk_violations`], the shared sweep
//!   behind the collision cost, the collision gradient, and callers that
//!   want proximity diagnostics.
//!
//! Invariants & assumptions
//! ------------------------
//! - Boundary arrays were validated at construction and match
//!   `shape.boundary_dim()`; jerk tensors are re-validated on every public
//!   entry point before integration.
//! - Trajectory sample 0 is pinned to the boundary conditions, so it has no
//!   jerk sensitivity; the final jerk column influences nothing and its
//!   gradient is identically zero.
//! - The collision direction `diff/dist` is the only place a division by the
//!   separation occurs; the divisor is floored by [`floor_separation`] while
//!   activation and magnitude keep the raw distance, so coincident agents
//!   contribute penalty cost but no repulsion.
//!
//! Conventions
//! -----------
//! - Jerk, position, and velocity tensors are `(agents, timesteps, dim)`;
//!   boundary matrices are `(agents, dim)`.
//! - The derivative of the position at step `s` with respect to the jerk at
//!   sample `i` is `coeffs.pos[s − 1 − i]` for `i ≤ s − 1` and zero
//!   otherwise; the terminal step uses the same table at
//!   `lag = timesteps − 2 − i`.
//! - Fallible entry points return [`SwarmResult`]; the [`Objective`] impl
//!   converts into the driver-side error domain via `From`.
//!
//! Downstream usage
//! ----------------
//! - Hand a `&SwarmObjective` to [`adam_descent`] or [`momentum_descent`]
//!   for a full-gradient run, or wrap it in [`WithoutCollisions`] for the
//!   warm-start phase that scores with the full cost while following the
//!   collision-free gradient.
//! - Use [`SwarmObjective::trajectories`] to turn a finished jerk tensor
//!   into position/velocity paths for export or separation checks.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin the closed-form cost of static scenarios, check
//!   both gradient variants against centered finite differences, and cover
//!   the zero-distance guard plus input rejection. The planner integration
//!   test exercises the engine end-to-end through the descent drivers.
//!
//! [`adam_descent`]: crate::optimization::descent::adam::adam_descent
//! [`momentum_descent`]: crate::optimization::descent::momentum::momentum_descent
//! [`gradient_no_collision`]: SwarmObjective::gradient_no_collision
//! [`walk_violations`]: SwarmObjective::walk_violations
use crate::{
    optimization::{
        descent::{
            traits::Objective,
            types::{Cost, Grad, Params},
        },
        errors::OptResult,
        numerical_stability::transformations::floor_separation,
    },
    swarm::{
        core::{
            boundary::BoundaryConditions,
            coefficients::LagCoefficients,
            integrator::{integrate_trajectories, Trajectories},
            shape::SwarmShape,
            validation::{validate_agent_matrix, validate_jerk_tensor},
            weights::CostWeights,
        },
        errors::SwarmResult,
    },
};
use ndarray::{Array1, Array3, s};

/// One agent pair closer than `min_dist` at one timestep.
///
/// Purpose
/// -------
/// Carry the data a violation visitor needs: where the violation occurred,
/// which agents are involved, their position difference, and its norm.
///
/// Fields
/// ------
/// - `step`: `usize`
///   Timestep of the violation, `0 ..= timesteps − 1`.
/// - `pair`: `(usize, usize)`
///   Agent indices with `pair.0 < pair.1`.
/// - `diff`: `Array1<f64>`
///   `positions[pair.0, step] − positions[pair.1, step]`, length `dim`.
/// - `dist`: `f64`
///   Euclidean norm of `diff`; strictly below the engine's `min_dist`.
///
/// Invariants
/// ----------
/// - `dist == ‖diff‖` and `0.0 ≤ dist < min_dist`.
/// - `diff` is owned per violation; visitors may keep or consume it.
#[derive(Debug, Clone)]
pub struct PairViolation {
    pub step: usize,
    pub pair: (usize, usize),
    pub diff: Array1<f64>,
    pub dist: f64,
}

/// Cost-and-gradient engine for one multi-agent planning problem.
///
/// Purpose
/// -------
/// Bundle the immutable problem description (shape, boundary conditions,
/// weights, lag tables) behind evaluation methods that map a jerk tensor to
/// a scalar cost, its analytic gradient, or the integrated trajectories.
///
/// Fields
/// ------
/// - `shape`: `SwarmShape`
///   Validated `(agents, timesteps, dim)` of the problem.
/// - `boundary`: `BoundaryConditions`
///   Start/target position and velocity matrices, `(agents, dim)` each.
/// - `weights`: `CostWeights`
///   Terminal and collision weights plus the activation distance.
/// - `coeffs`: `LagCoefficients`
///   Δt-folded lag tables shared by integration and differentiation.
///
/// Invariants
/// ----------
/// - All four boundary matrices match `shape.boundary_dim()` and are finite;
///   enforced by [`SwarmObjective::new`].
/// - `coeffs` was built for `shape.timesteps`, so every lag arising in the
///   sensitivity windows indexes inside its tables.
/// - The engine holds no mutable evaluation state; evaluations on the same
///   instance are independent and the type is freely shareable by reference.
#[derive(Debug, Clone)]
pub struct SwarmObjective {
    pub shape: SwarmShape,
    pub boundary: BoundaryConditions,
    pub weights: CostWeights,
    pub coeffs: LagCoefficients,
}

impl SwarmObjective {
    /// Build an engine from a problem description.
    ///
    /// Parameters
    /// ----------
    /// - `shape`: `SwarmShape`
    ///   Problem dimensions; `timesteps ≥ 2` already enforced upstream.
    /// - `boundary`: `BoundaryConditions`
    ///   Start/target matrices. Re-checked against `shape` here because a
    ///   `BoundaryConditions` may have been validated against a different
    ///   shape than the one supplied.
    /// - `weights`: `CostWeights`
    ///   Validated cost weights and activation distance.
    /// - `dt`: `f64`
    ///   Timestep duration in seconds; finite and strictly positive.
    ///
    /// Returns
    /// -------
    /// `SwarmResult<Self>`
    ///   The engine with its lag tables precomputed for `shape.timesteps`.
    ///
    /// Errors
    /// ------
    /// - `SwarmError::InvalidTimestep`
    ///   If `dt` is non-finite or not strictly positive.
    /// - `SwarmError::BoundaryShapeMismatch` / `SwarmError::NonFiniteBoundary`
    ///   If any boundary matrix disagrees with `shape` or carries a
    ///   non-finite entry.
    pub fn new(
        shape: SwarmShape, boundary: BoundaryConditions, weights: CostWeights, dt: f64,
    ) -> SwarmResult<Self> {
        let coeffs = LagCoefficients::new(shape.timesteps, dt)?;
        let expected = shape.boundary_dim();
        validate_agent_matrix("start_vel", &boundary.start_vel, expected)?;
        validate_agent_matrix("start_pos", &boundary.start_pos, expected)?;
        validate_agent_matrix("target_vel", &boundary.target_vel, expected)?;
        validate_agent_matrix("target_pos", &boundary.target_pos, expected)?;
        Ok(Self { shape, boundary, weights, coeffs })
    }

    /// Score a candidate jerk tensor.
    ///
    /// Parameters
    /// ----------
    /// - `jerks`: `&Array3<f64>`
    ///   Candidate tensor, shape `shape.jerk_dim()`, finite entries.
    ///
    /// Returns
    /// -------
    /// `SwarmResult<f64>`
    ///   Terminal velocity error + terminal position error + accumulated
    ///   proximity penalty. Non-negative whenever the weights are.
    ///
    /// Errors
    /// ------
    /// - `SwarmError::JerkShapeMismatch` / `SwarmError::NonFiniteJerk`
    ///   If the tensor fails validation; the trajectories are not computed
    ///   in that case.
    ///
    /// Notes
    /// -----
    /// - The proximity penalty sweeps every timestep including sample 0, so
    ///   boundary conditions that already violate `min_dist` contribute an
    ///   irreducible floor to the cost.
    pub fn cost(&self, jerks: &Array3<f64>) -> SwarmResult<f64> {
        validate_jerk_tensor(jerks, self.shape.jerk_dim())?;
        let trajectories = integrate_trajectories(jerks, &self.boundary, &self.coeffs);
        Ok(self.terminal_cost(&trajectories) + self.collision_cost(&trajectories.positions))
    }

    /// Analytic gradient of [`cost`](Self::cost) with respect to every jerk
    /// entry.
    ///
    /// Parameters
    /// ----------
    /// - `jerks`: `&Array3<f64>`
    ///   Candidate tensor, shape `shape.jerk_dim()`, finite entries.
    ///
    /// Returns
    /// -------
    /// `SwarmResult<Array3<f64>>`
    ///   Tensor of the same shape as `jerks` holding `∂cost/∂J`.
    ///
    /// Errors
    /// ------
    /// - `SwarmError::JerkShapeMismatch` / `SwarmError::NonFiniteJerk`
    ///   If the tensor fails validation.
    ///
    /// Notes
    /// -----
    /// - Terminal terms contribute
    ///   `2·w·err[agent, d]·coeff[timesteps − 2 − i]` to sample `i` for
    ///   `i ≤ timesteps − 2`, with the velocity and position tables used for
    ///   their respective errors.
    /// - Each violating pair-step spreads
    ///   `−(2·w_col/min_dist)·(1 − dist/min_dist)·diff/dist` through the
    ///   position sensitivities of the samples before it, with opposite
    ///   signs on the two agents. The `1/dist` divisor is floored by
    ///   [`floor_separation`].
    pub fn gradient(&self, jerks: &Array3<f64>) -> SwarmResult<Array3<f64>> {
        validate_jerk_tensor(jerks, self.shape.jerk_dim())?;
        let trajectories = integrate_trajectories(jerks, &self.boundary, &self.coeffs);
        let mut gradient = self.terminal_gradient(&trajectories);
        self.add_collision_gradient(&trajectories.positions, &mut gradient);
        Ok(gradient)
    }

    /// Gradient of the terminal-error terms only.
    ///
    /// The exact derivative of the cost with the proximity penalty removed.
    /// The warm-start phase follows this direction while still scoring full
    /// [`cost`](Self::cost); on a swarm whose separations never fall below
    /// `min_dist` it coincides with [`gradient`](Self::gradient) exactly.
    ///
    /// Errors
    /// ------
    /// - `SwarmError::JerkShapeMismatch` / `SwarmError::NonFiniteJerk`
    ///   If the tensor fails validation.
    pub fn gradient_no_collision(&self, jerks: &Array3<f64>) -> SwarmResult<Array3<f64>> {
        validate_jerk_tensor(jerks, self.shape.jerk_dim())?;
        let trajectories = integrate_trajectories(jerks, &self.boundary, &self.coeffs);
        Ok(self.terminal_gradient(&trajectories))
    }

    /// Integrate a jerk tensor into position/velocity trajectories.
    ///
    /// Validates the tensor, then returns the closed-form rollout. Useful
    /// for exporting a finished plan or for separation diagnostics via
    /// [`Trajectories::min_separation`].
    ///
    /// Errors
    /// ------
    /// - `SwarmError::JerkShapeMismatch` / `SwarmError::NonFiniteJerk`
    ///   If the tensor fails validation.
    pub fn trajectories(&self, jerks: &Array3<f64>) -> SwarmResult<Trajectories> {
        validate_jerk_tensor(jerks, self.shape.jerk_dim())?;
        Ok(integrate_trajectories(jerks, &self.boundary, &self.coeffs))
    }

    /// Visit every violating pair-step in a position tensor.
    ///
    /// Parameters
    /// ----------
    /// - `positions`: `&Array3<f64>`
    ///   Position tensor, `(agents, timesteps, dim)`; normally the output of
    ///   [`integrate_trajectories`] for this engine.
    /// - `visit`: `F: FnMut(PairViolation)`
    ///   Closure invoked once per `(pair, step)` whose separation is
    ///   strictly below `min_dist`, in step-major order with `pair.0 <
    ///   pair.1`.
    ///
    /// Notes
    /// -----
    /// - Pairs at exactly `min_dist` are not visited; the penalty and its
    ///   gradient are both zero there, so the cost stays continuously
    ///   differentiable across the activation boundary.
    /// - The sweep is O(agents² · timesteps); it is the shared traversal
    ///   behind the collision cost and the collision gradient.
    pub fn walk_violations<F>(&self, positions: &Array3<f64>, mut visit: F)
    where
        F: FnMut(PairViolation),
    {
        for step in 0..self.shape.timesteps {
            for first in 0..self.shape.agents {
                for second in (first + 1)..self.shape.agents {
                    let diff = &positions.slice(s![first, step, ..])
                        - &positions.slice(s![second, step, ..]);
                    let dist = diff.dot(&diff).sqrt();
                    if dist < self.weights.min_dist {
                        visit(PairViolation { step, pair: (first, second), diff, dist });
                    }
                }
            }
        }
    }

    /// Terminal velocity and position error, summed over agents and dims.
    fn terminal_cost(&self, trajectories: &Trajectories) -> f64 {
        let terminal = self.shape.timesteps - 1;
        let mut cost = 0.0;
        for agent in 0..self.shape.agents {
            let vel_err = &trajectories.velocities.slice(s![agent, terminal, ..])
                - &self.boundary.target_vel.row(agent);
            let pos_err = &trajectories.positions.slice(s![agent, terminal, ..])
                - &self.boundary.target_pos.row(agent);
            cost += self.weights.w_vel * vel_err.dot(&vel_err);
            cost += self.weights.w_pos * pos_err.dot(&pos_err);
        }
        cost
    }

    /// Accumulated proximity penalty over all pair-steps below `min_dist`.
    fn collision_cost(&self, positions: &Array3<f64>) -> f64 {
        let mut cost = 0.0;
        self.walk_violations(positions, |violation| {
            let overlap = 1.0 - violation.dist / self.weights.min_dist;
            cost += self.weights.w_col * overlap * overlap;
        });
        cost
    }

    /// Gradient of the terminal-error terms through the integrator's linear
    /// map. Sample `i` sees the terminal step at lag `timesteps − 2 − i`;
    /// the final column stays zero.
    fn terminal_gradient(&self, trajectories: &Trajectories) -> Array3<f64> {
        let terminal = self.shape.timesteps - 1;
        let mut gradient = Array3::zeros(self.shape.jerk_dim());
        for agent in 0..self.shape.agents {
            let vel_err = &trajectories.velocities.slice(s![agent, terminal, ..])
                - &self.boundary.target_vel.row(agent);
            let pos_err = &trajectories.positions.slice(s![agent, terminal, ..])
                - &self.boundary.target_pos.row(agent);
            for sample in 0..terminal {
                let lag = terminal - 1 - sample;
                let mut row = gradient.slice_mut(s![agent, sample, ..]);
                row.scaled_add(2.0 * self.weights.w_vel * self.coeffs.vel[lag], &vel_err);
                row.scaled_add(2.0 * self.weights.w_pos * self.coeffs.pos[lag], &pos_err);
            }
        }
        gradient
    }

    /// Add the proximity-penalty gradient onto `gradient` in place.
    ///
    /// The position at `step` depends on the jerks strictly before it, so
    /// each violation spreads over samples `0 .. step` at lag
    /// `step − 1 − sample`; at step 0 the window is empty and the violation
    /// contributes cost only.
    fn add_collision_gradient(&self, positions: &Array3<f64>, gradient: &mut Array3<f64>) {
        self.walk_violations(positions, |violation| {
            let overlap = 1.0 - violation.dist / self.weights.min_dist;
            let scale = -(2.0 * self.weights.w_col / self.weights.min_dist) * overlap
                / floor_separation(violation.dist);
            let (first, second) = violation.pair;
            for sample in 0..violation.step {
                let lag = violation.step - 1 - sample;
                let coeff = scale * self.coeffs.pos[lag];
                gradient.slice_mut(s![first, sample, ..]).scaled_add(coeff, &violation.diff);
                gradient.slice_mut(s![second, sample, ..]).scaled_add(-coeff, &violation.diff);
            }
        });
    }
}

impl Objective for SwarmObjective {
    fn cost(&self, params: &Params) -> OptResult<Cost> {
        Ok(SwarmObjective::cost(self, params)?)
    }

    fn gradient(&self, params: &Params) -> OptResult<Grad> {
        Ok(SwarmObjective::gradient(self, params)?)
    }

    fn check(&self, params: &Params) -> OptResult<()> {
        Ok(validate_jerk_tensor(params, self.shape.jerk_dim())?)
    }
}

/// Warm-start view of a [`SwarmObjective`]: full cost, collision-free
/// gradient.
///
/// Wrapping an engine in `WithoutCollisions` changes nothing about its
/// scoring; only the descent direction drops the proximity coupling. Early
/// stopping inside a driver therefore still refers to the true objective,
/// and a run that converges under this view is genuinely cheap rather than
/// blind to its own score.
pub struct WithoutCollisions<'a>(pub &'a SwarmObjective);

impl Objective for WithoutCollisions<'_> {
    fn cost(&self, params: &Params) -> OptResult<Cost> {
        Ok(self.0.cost(params)?)
    }

    fn gradient(&self, params: &Params) -> OptResult<Grad> {
        Ok(self.0.gradient_no_collision(params)?)
    }

    fn check(&self, params: &Params) -> OptResult<()> {
        Ok(validate_jerk_tensor(params, self.0.shape.jerk_dim())?)
    }
}
