//! ## Purpose
//! Classical momentum gradient descent over a rank-3 parameter tensor.
//!
//! ## Update rule
//! Per iteration `i` (zero-based), with cost checked at the top:
//! - `velocity ← momentum·velocity + stepsize·gradient`
//! - `params ← clip(params − velocity, −param_limit, +param_limit)`
//!
//! ## Stopping
//! - Cost target: the driver returns as soon as the cost evaluated at the
//!   top of an iteration falls strictly below `cost_target`, before spending
//!   a gradient evaluation on that iteration.
//! - Step limit: after `max_steps` updates the cost of the final clipped
//!   tensor is recomputed so the outcome's cost always describes the tensor
//!   it carries.
use crate::optimization::{
    descent::{
        traits::{DescentOutcome, MomentumOptions, Objective, Termination},
        types::{Grad, Params},
        validation::{validate_cost, validate_gradient},
    },
    errors::OptResult,
};

/// Run momentum gradient descent from `init_params`.
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
pub fn momentum_descent<O: Objective>(
    objective: &O, init_params: Params, opts: &MomentumOptions,
) -> OptResult<DescentOutcome> {
    objective.check(&init_params)?;

    let shape = init_params.dim();
    let mut params = init_params;
    let mut velocity = Params::zeros(shape);
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

        velocity = velocity * opts.momentum + &gradient * opts.stepsize;
        params -= &velocity;
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
