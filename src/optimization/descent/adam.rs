//! Purpose
//! -------
//! Adam gradient descent over a rank-3 parameter tensor, with elementwise
//! clipping and a harmonically decayed step size.
//!
//! Key behaviors
//! -------------
//! - Maintains exponential moving averages of the gradient (`first_moment`)
//!   and its elementwise square (`second_moment`).
//! - Bias correction uses *constant* denominators: `m̂ = m/(1−β1)` and
//!   `v̂ = v/(1−β2)`, not the textbook time-varying `1−βᵗ`. Early steps are
//!   therefore smaller than textbook Adam and later steps larger (the
//!   effective step approaches `2·stepsize_i` for β1 = 0.95, β2 = 0.99).
//!   This is the tuned, load-bearing form; do not "fix" it to the textbook
//!   schedule.
//! - The base step size decays as `stepsize / (1 + 0.01·i)` with `i` the
//!   zero-based iteration index.
//! - After every update the tensor is clipped elementwise into
//!   `[−param_limit, +param_limit]`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Cost is evaluated at the top of each iteration and checked against the
//!   target before any gradient work is spent on that iteration.
//! - Hitting the step limit is a normal outcome, never an error.
//! - Every returned tensor is finite and inside the clipping box.
//!
//! Conventions
//! -----------
//! - `iter` counts completed update iterations; the outcome's `iterations`
//!   field is the number of updates applied to the returned tensor.
//!
//! Downstream usage
//! ----------------
//! - The swarm planner runs this driver twice per plan: a coarse pass that
//!   follows the collision-free gradient and a fine pass on the full
//!   objective.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the constant-denominator correction and the decay
//!   schedule through a constant-gradient objective, where both admit
//!   closed forms.
use crate::optimization::{
    descent::{
        traits::{AdamOptions, DescentOutcome, Objective, Termination},
        types::{Grad, Params},
        validation::{validate_cost, validate_gradient},
    },
    errors::OptResult,
};

/// Run Adam gradient descent from `init_params`.
///
/// Calls `objective.check` once before the loop, then iterates up to
/// `opts.max_steps` times. Every cost and gradient evaluation is validated
/// for finiteness (and the gradient for shape) before use.
///
/// # Errors
/// - Propagates objective errors from `check`, `cost` and `gradient`.
/// - [`OptError::NonFiniteCost`] if the objective produces a non-finite
///   cost.
/// - [`OptError::GradientShapeMismatch`] / [`OptError::InvalidGradient`]
///   for malformed gradients.
///
/// [`OptError::NonFiniteCost`]: crate::optimization::errors::OptError::NonFiniteCost
/// [`OptError::GradientShapeMismatch`]: crate::optimization::errors::OptError::GradientShapeMismatch
/// [`OptError::InvalidGradient`]: crate::optimization::errors::OptError::InvalidGradient
pub fn adam_descent<O: Objective>(
    objective: &O, init_params: Params, opts: &AdamOptions,
) -> OptResult<DescentOutcome> {
    objective.check(&init_params)?;

    let shape = init_params.dim();
    let mut params = init_params;
    let mut first_moment = Params::zeros(shape);
    let mut second_moment = Params::zeros(shape);
    let mut cost_evals: usize = 0;
    let mut grad_evals: usize = 0;
    let mut last_grad: Option<Grad> = None;

    for iter in 0..opts.max_steps {
        let cost = objective.cost(&params)?;
        cost_evals += 1;
        validate_cost(cost)?;
        log::debug!("iteration {iter}: cost {cost:.6e}");

        if cost < opts.cost_target {
            log::info!("{}", Termination::TargetReached);
            return DescentOutcome::new(
                params,
                cost,
                Termination::TargetReached,
                iter,
                cost_evals,
                grad_evals,
                last_grad.as_ref(),
            );
        }

        let gradient = objective.gradient(&params)?;
        grad_evals += 1;
        validate_gradient(&gradient, shape)?;

        first_moment = first_moment * opts.beta1 + &gradient * (1.0 - opts.beta1);
        second_moment =
            second_moment * opts.beta2 + gradient.mapv(|g| g * g) * (1.0 - opts.beta2);
        let m_hat = &first_moment / (1.0 - opts.beta1);
        let v_hat = &second_moment / (1.0 - opts.beta2);
        let decayed = opts.stepsize / (1.0 + 0.01 * iter as f64);

        let update = m_hat / (v_hat.mapv(f64::sqrt) + opts.epsilon) * decayed;
        params -= &update;
        params.mapv_inplace(|p| p.clamp(-opts.param_limit, opts.param_limit));
        last_grad = Some(gradient);
    }

    // Step-limit exit: the last update may have moved the tensor, so the
    // reported cost is recomputed for the tensor actually returned.
    let cost = objective.cost(&params)?;
    cost_evals += 1;
    validate_cost(cost)?;
    log::info!("{}", Termination::StepLimit);
    DescentOutcome::new(
        params,
        cost,
        Termination::StepLimit,
        opts.max_steps,
        cost_evals,
        grad_evals,
        last_grad.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        descent::types::Cost,
        errors::OptError,
    };
    use ndarray::Array3;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Convergence to the cost target on a smooth quadratic bowl under the
    //   reference β/ε settings.
    // - The constant-denominator bias correction, pinned through a
    //   constant-gradient objective where two steps admit a closed form that
    //   differs from textbook Adam.
    // - Clip saturation under a persistent gradient.
    // - Early-stop bookkeeping (iteration and evaluation counts).
    //
    // These tests intentionally DO NOT cover:
    // - Momentum-driver behavior (see `momentum.rs`).
    // - Real trajectory objectives (see the swarm model tests).
    // -------------------------------------------------------------------------

    /// Quadratic bowl `0.5·‖x − target‖²` with gradient `x − target`.
    struct Quadratic {
        target: Array3<f64>,
    }

    impl Objective for Quadratic {
        fn cost(&self, params: &Params) -> OptResult<Cost> {
            let diff = params - &self.target;
            Ok(0.5 * diff.iter().map(|d| d * d).sum::<f64>())
        }

        fn gradient(&self, params: &Params) -> OptResult<Grad> {
            Ok(params - &self.target)
        }

        fn check(&self, params: &Params) -> OptResult<()> {
            if params.dim() != self.target.dim() {
                return Err(OptError::ParamsShapeMismatch {
                    expected: self.target.dim(),
                    found: params.dim(),
                });
            }
            Ok(())
        }
    }

    /// Linear slope `100 + Σ g·x` whose gradient is the constant tensor `g`.
    ///
    /// The offset keeps the cost far above zero so a 0.0 target never fires
    /// and the driver always runs its full budget.
    struct ConstantSlope {
        slope: Array3<f64>,
    }

    impl Objective for ConstantSlope {
        fn cost(&self, params: &Params) -> OptResult<Cost> {
            Ok(100.0 + (params * &self.slope).sum())
        }

        fn gradient(&self, _params: &Params) -> OptResult<Grad> {
            Ok(self.slope.clone())
        }

        fn check(&self, params: &Params) -> OptResult<()> {
            if params.dim() != self.slope.dim() {
                return Err(OptError::ParamsShapeMismatch {
                    expected: self.slope.dim(),
                    found: params.dim(),
                });
            }
            Ok(())
        }
    }

    fn pm_two_slope() -> Array3<f64> {
        let mut slope = Array3::from_elem((1, 2, 2), 2.0);
        slope[(0, 1, 0)] = -2.0;
        slope[(0, 1, 1)] = -2.0;
        slope
    }

    #[test]
    // Purpose
    // -------
    // Verify the driver reaches a modest cost target on a quadratic bowl
    // under the reference β1/β2/ε settings.
    //
    // Given
    // -----
    // - Quadratic centered at 0.05 per entry, start at zero.
    // - stepsize 0.01, β1 0.95, β2 0.99, target 1e-3, budget 2000.
    //
    // Expect
    // ------
    // - `converged == true`, final cost below 1e-3, budget not exhausted.
    fn adam_descent_reaches_cost_target_on_quadratic() {
        let objective = Quadratic { target: Array3::from_elem((2, 3, 2), 0.05) };
        let opts = AdamOptions::new(0.01, 0.95, 0.99, 1e-8, 1e-3, 2000, 0.1).unwrap();
        let init = Array3::<f64>::zeros((2, 3, 2));

        let outcome = adam_descent(&objective, init, &opts).unwrap();

        assert!(outcome.converged);
        assert_eq!(outcome.status, "stopping due to reaching cost target");
        assert!(outcome.cost < 1e-3);
        assert!(outcome.iterations < 2000);
    }

    #[test]
    // Purpose
    // -------
    // Pin the constant-denominator bias correction. For a constant gradient
    // `g` the first two updates have the closed form
    //   |Δx₁| = s·|g|/(|g| + ε)
    //   |Δx₂| = (s/1.01)·(1+β1)·|g| / (√(1+β2)·|g| + ε)
    // whose two-step total (≈ 0.023686 for s = 0.01) differs from textbook
    // Adam (≈ 0.019901), so this test fails if the correction is ever
    // changed to the time-varying schedule.
    //
    // Given
    // -----
    // - Constant slope ±2.0 per entry, start at zero, budget of exactly 2.
    //
    // Expect
    // ------
    // - Each entry moved opposite its slope by the closed-form magnitude.
    fn adam_descent_uses_constant_denominator_bias_correction() {
        let slope = pm_two_slope();
        let objective = ConstantSlope { slope: slope.clone() };
        let opts = AdamOptions::new(0.01, 0.95, 0.99, 1e-8, 0.0, 2, 0.1).unwrap();
        let init = Array3::<f64>::zeros((1, 2, 2));

        let outcome = adam_descent(&objective, init, &opts).unwrap();

        let first = 0.01;
        let second = (0.01 / 1.01) * (1.95 * 2.0) / ((1.99_f64).sqrt() * 2.0);
        let expected_mag = first + second;
        for (index, &slope_entry) in slope.indexed_iter() {
            let expected = -slope_entry.signum() * expected_mag;
            assert!(
                (outcome.params_hat[index] - expected).abs() < 1e-6,
                "entry {index:?}: found {}, expected {expected}",
                outcome.params_hat[index]
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a persistent gradient drives every entry to the clipping
    // boundary and no further.
    //
    // Given
    // -----
    // - Constant slope ±2.0 per entry, limit 0.1, budget 20 (saturation
    //   needs about 7 updates).
    //
    // Expect
    // ------
    // - Every entry sits exactly on ±0.1.
    fn adam_descent_saturates_at_param_limit() {
        let slope = pm_two_slope();
        let objective = ConstantSlope { slope: slope.clone() };
        let opts = AdamOptions::new(0.01, 0.95, 0.99, 1e-8, 0.0, 20, 0.1).unwrap();
        let init = Array3::<f64>::zeros((1, 2, 2));

        let outcome = adam_descent(&objective, init, &opts).unwrap();

        for (index, &slope_entry) in slope.indexed_iter() {
            assert_eq!(outcome.params_hat[index], -slope_entry.signum() * 0.1);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify early-stop bookkeeping: the target check happens at the top of
    // the iteration, so stopping after one update costs two cost
    // evaluations and one gradient evaluation.
    //
    // Given
    // -----
    // - Quadratic centered at 0.05 (initial cost 0.015) with target 0.014,
    //   which cannot fire before the first update but fires right after it.
    //
    // Expect
    // ------
    // - `iterations == 1`, `cost_evals == 2`, `grad_evals == 1`.
    // - `grad_norm` reflects the iteration-0 gradient (all entries −0.05).
    fn adam_descent_early_stop_counts_evaluations() {
        let objective = Quadratic { target: Array3::from_elem((2, 3, 2), 0.05) };
        let opts = AdamOptions::new(0.01, 0.95, 0.99, 1e-8, 0.014, 50, 0.1).unwrap();
        let init = Array3::<f64>::zeros((2, 3, 2));

        let outcome = adam_descent(&objective, init, &opts).unwrap();

        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.cost_evals, 2);
        assert_eq!(outcome.grad_evals, 1);
        let expected_norm = 0.05 * (12.0_f64).sqrt();
        assert!((outcome.grad_norm.unwrap() - expected_norm).abs() < 1e-12);
    }
}
