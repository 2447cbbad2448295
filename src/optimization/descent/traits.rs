//! Public API surface for gradient-descent minimization.
//!
//! - [`Objective`]: trait users implement for their differentiable problem.
//! - [`MomentumOptions`] and [`AdamOptions`]: configuration for the drivers.
//! - [`Termination`]: why a driver stopped.
//! - [`DescentOutcome`]: normalized result returned by both drivers.
//!
//! Convention: the drivers *minimize* a scalar cost `c(x)` over a rank-3
//! parameter tensor. Analytic gradients are required; an objective returns
//! the gradient of the cost itself (no sign flipping anywhere).
use crate::optimization::{
    descent::{
        types::{Cost, Grad, Params},
        validation::{
            validate_cost, validate_params_hat, verify_beta, verify_cost_target, verify_epsilon,
            verify_max_steps, verify_momentum, verify_param_limit, verify_stepsize,
        },
    },
    errors::OptResult,
};

/// User-implemented differentiable-objective interface.
///
/// The drivers minimize `cost(x)` over a tensor `x` of shape
/// `(agents, timesteps, dim)` (any rank-3 problem works; the axis names come
/// from the trajectory domain this crate serves).
///
/// Required:
/// - `cost(&Params) -> OptResult<Cost>`: evaluate the scalar objective.
/// - `gradient(&Params) -> OptResult<Grad>`: analytic gradient of `cost`,
///   same shape as the input tensor.
/// - `check(&Params) -> OptResult<()>`: validation hook to reject
///   wrong-shape or non-finite tensors. Called once before the descent loop.
pub trait Objective {
    fn cost(&self, params: &Params) -> OptResult<Cost>;
    fn gradient(&self, params: &Params) -> OptResult<Grad>;
    fn check(&self, params: &Params) -> OptResult<()>;
}

/// Configuration for classical momentum gradient descent.
///
/// Fields:
/// - `stepsize`: gradient scaling per update; finite and > 0.
/// - `momentum`: decay of the velocity accumulator; in `[0, 1)`.
/// - `cost_target`: early-stop threshold — the driver returns as soon as the
///   cost evaluated at the top of an iteration falls *below* this value.
/// - `max_steps`: hard cap on the number of update iterations; > 0.
/// - `param_limit`: elementwise clipping bound applied after every update;
///   finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumOptions {
    pub stepsize: f64,
    pub momentum: f64,
    pub cost_target: f64,
    pub max_steps: usize,
    pub param_limit: f64,
}

impl MomentumOptions {
    /// Construct validated momentum options.
    ///
    /// # Errors
    /// - [`OptError::InvalidStepsize`] for non-finite or non-positive step
    ///   sizes.
    /// - [`OptError::InvalidMomentum`] for momentum outside `[0, 1)`.
    /// - [`OptError::InvalidCostTarget`] for non-finite targets.
    /// - [`OptError::InvalidMaxSteps`] if `max_steps == 0`.
    /// - [`OptError::InvalidParamLimit`] for non-finite or non-positive
    ///   limits.
    ///
    /// [`OptError::InvalidStepsize`]: crate::optimization::errors::OptError::InvalidStepsize
    /// [`OptError::InvalidMomentum`]: crate::optimization::errors::OptError::InvalidMomentum
    /// [`OptError::InvalidCostTarget`]: crate::optimization::errors::OptError::InvalidCostTarget
    /// [`OptError::InvalidMaxSteps`]: crate::optimization::errors::OptError::InvalidMaxSteps
    /// [`OptError::InvalidParamLimit`]: crate::optimization::errors::OptError::InvalidParamLimit
    pub fn new(
        stepsize: f64, momentum: f64, cost_target: f64, max_steps: usize, param_limit: f64,
    ) -> OptResult<Self> {
        verify_stepsize(stepsize)?;
        verify_momentum(momentum)?;
        verify_cost_target(cost_target)?;
        verify_max_steps(max_steps)?;
        verify_param_limit(param_limit)?;
        Ok(Self { stepsize, momentum, cost_target, max_steps, param_limit })
    }
}

/// Configuration for Adam gradient descent.
///
/// Fields:
/// - `stepsize`: base step size, decayed per iteration as
///   `stepsize / (1 + 0.01·i)`; finite and > 0.
/// - `beta1`, `beta2`: first/second moment decay coefficients; in `[0, 1)`.
/// - `epsilon`: denominator offset guarding the square root; finite and > 0.
/// - `cost_target`: early-stop threshold (see [`MomentumOptions`]).
/// - `max_steps`: hard cap on update iterations; > 0.
/// - `param_limit`: elementwise clipping bound applied after every update.
///
/// Bias correction is the constant-denominator form `m̂ = m/(1−β1)`,
/// `v̂ = v/(1−β2)` — deliberately *not* the textbook time-varying `1−β^t`
/// (see the driver documentation).
///
/// Default:
/// The coarse-phase settings of the reference scenario — `stepsize = 0.01`,
/// `beta1 = 0.95`, `beta2 = 0.99`, `epsilon = 1e-8`, `cost_target = 0.0`
/// (never early-stops on a non-negative objective), `max_steps = 50`,
/// `param_limit = 0.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdamOptions {
    pub stepsize: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    pub cost_target: f64,
    pub max_steps: usize,
    pub param_limit: f64,
}

impl AdamOptions {
    /// Construct validated Adam options.
    ///
    /// # Errors
    /// - [`OptError::InvalidStepsize`] for non-finite or non-positive step
    ///   sizes.
    /// - [`OptError::InvalidBeta`] for β1/β2 outside `[0, 1)`.
    /// - [`OptError::InvalidEpsilon`] for non-finite or non-positive ε.
    /// - [`OptError::InvalidCostTarget`] for non-finite targets.
    /// - [`OptError::InvalidMaxSteps`] if `max_steps == 0`.
    /// - [`OptError::InvalidParamLimit`] for non-finite or non-positive
    ///   limits.
    ///
    /// [`OptError::InvalidStepsize`]: crate::optimization::errors::OptError::InvalidStepsize
    /// [`OptError::InvalidBeta`]: crate::optimization::errors::OptError::InvalidBeta
    /// [`OptError::InvalidEpsilon`]: crate::optimization::errors::OptError::InvalidEpsilon
    /// [`OptError::InvalidCostTarget`]: crate::optimization::errors::OptError::InvalidCostTarget
    /// [`OptError::InvalidMaxSteps`]: crate::optimization::errors::OptError::InvalidMaxSteps
    /// [`OptError::InvalidParamLimit`]: crate::optimization::errors::OptError::InvalidParamLimit
    pub fn new(
        stepsize: f64, beta1: f64, beta2: f64, epsilon: f64, cost_target: f64, max_steps: usize,
        param_limit: f64,
    ) -> OptResult<Self> {
        verify_stepsize(stepsize)?;
        verify_beta("beta1", beta1)?;
        verify_beta("beta2", beta2)?;
        verify_epsilon(epsilon)?;
        verify_cost_target(cost_target)?;
        verify_max_steps(max_steps)?;
        verify_param_limit(param_limit)?;
        Ok(Self { stepsize, beta1, beta2, epsilon, cost_target, max_steps, param_limit })
    }
}

impl Default for AdamOptions {
    fn default() -> Self {
        Self {
            stepsize: 0.01,
            beta1: 0.95,
            beta2: 0.99,
            epsilon: 1e-8,
            cost_target: 0.0,
            max_steps: 50,
            param_limit: 0.1,
        }
    }
}

/// Why a driver stopped.
///
/// Both variants are normal termination modes, reported through the log and
/// the outcome's status string — never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Cost fell below the configured target at the top of an iteration.
    TargetReached,
    /// The iteration budget was exhausted.
    StepLimit,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::TargetReached => write!(f, "stopping due to reaching cost target"),
            Termination::StepLimit => write!(f, "stopping due to reaching step limit"),
        }
    }
}

/// Canonical result returned by both descent drivers.
///
/// - `params_hat`: final parameter tensor (every entry within the clipping
///   limit and finite).
/// - `cost`: cost of `params_hat` (recomputed after the final update on the
///   step-limit path, so it always matches the returned tensor).
/// - `converged`: `true` iff the cost target was reached.
/// - `status`: human-readable termination string.
/// - `iterations`: number of update iterations performed before stopping.
/// - `cost_evals`, `grad_evals`: evaluation counters for the run.
/// - `grad_norm`: L2 norm of the last evaluated gradient, if any was
///   evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentOutcome {
    pub params_hat: Params,
    pub cost: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub cost_evals: usize,
    pub grad_evals: usize,
    pub grad_norm: Option<f64>,
}

impl DescentOutcome {
    /// Build a validated [`DescentOutcome`] from raw driver state.
    ///
    /// Performs:
    /// - `params_hat` check via `validate_params_hat` (all finite).
    /// - `cost` check via `validate_cost` (finite).
    /// - Maps [`Termination`] into `(converged, status)`.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `params_hat` or `cost`.
    pub fn new(
        params_hat: Params, cost: f64, termination: Termination, iterations: usize,
        cost_evals: usize, grad_evals: usize, grad: Option<&Grad>,
    ) -> OptResult<Self> {
        let params_hat = validate_params_hat(params_hat)?;
        validate_cost(cost)?;
        let converged = termination == Termination::TargetReached;
        let status = termination.to_string();
        let grad_norm = grad.map(|g| g.iter().map(|v| v * v).sum::<f64>().sqrt());
        Ok(Self {
            params_hat,
            cost,
            converged,
            status,
            iterations,
            cost_evals,
            grad_evals,
            grad_norm,
        })
    }
}
