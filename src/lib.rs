//! swarm_trajopt — multi-agent minimum-jerk trajectory optimization with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the swarm trajectory planner to Python via the `_swarm_trajopt` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes registered on the `swarm_trajopt` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`swarm` and `optimization`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_swarm_trajopt` Python extension.
//! - Convert numpy arrays and keyword arguments into validated Rust types
//!   before any numerical work starts.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g.
//!   `SwarmObjective`, `PlanOutcome`).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Tensors cross the boundary as `float64` numpy arrays; boundary matrices
//!   are `(agents, dim)` and jerk tensors are `(agents, timesteps, dim)`.
//! - Indexing is 0-based on both sides of the boundary.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_swarm_trajopt` module defined
//!   here and wraps its classes in user-facing Python APIs.
//! - External users are expected to interact with either the safe Rust APIs or
//!   the pure-Python wrappers; the PyO3 plumbing is considered internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the planner integration tests under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that classes can be constructed,
//!   called, and round-tripped correctly from Python.

pub mod optimization;
pub mod swarm;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array3;

#[cfg(feature = "python-bindings")]
use numpy::{PyArray2, PyArray3};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::descent::traits::DescentOutcome,
    swarm::{
        models::objective::SwarmObjective,
        planner::{plan, PlanOutcome},
    },
    utils::{
        build_objective, extract_jerk_tensor, extract_plan_options, matrix_to_pyarray,
        tensor_to_pyarray,
    },
};

/// SwarmProblem — Python-facing wrapper for a swarm trajectory objective.
///
/// Purpose
/// -------
/// Expose the [`SwarmObjective`] API to Python callers while preserving the
/// core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a [`SwarmObjective`] from numpy boundary arrays and optional
///   weight/timing keyword arguments.
/// - Provide `cost`, `gradient`, and `trajectories` methods that convert
///   numpy jerk tensors and delegate to the core implementation.
/// - Provide a `plan` method that runs the two-phase descent schedule and
///   returns a [`SwarmPlan`] with the refined jerks and diagnostics.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `SwarmProblem(start_vel, start_pos, target_vel, target_pos, timesteps, ...)`:
/// - `start_vel`, `start_pos`, `target_vel`, `target_pos`: array-like
///   `(agents, dim)` float64 matrices describing the boundary conditions.
/// - `timesteps`: `usize`
///   Number of jerk samples per agent; must be at least 2.
/// - `dt`: `Option<f64>`
///   Integration interval in seconds; defaults to `0.5`.
/// - `w_vel`, `w_pos`, `w_col`, `min_dist`: `Option<f64>`
///   Cost weights and separation threshold, matching [`CostWeights`]
///   semantics and defaults.
///
/// Fields
/// ------
/// - `inner`: [`SwarmObjective`]
///   Fully validated objective holding the swarm shape, boundary conditions,
///   weights, and integration coefficients.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed [`SwarmObjective`] created through
///   [`build_objective`]; boundary matrices agree with the swarm shape and
///   all weights are finite.
///
/// Performance
/// -----------
/// - All heavy numerical work occurs inside `inner`; this wrapper performs
///   only input conversion, dispatch, and error mapping.
///
/// Notes
/// -----
/// - Native Rust callers should usually work with [`SwarmObjective`] directly;
///   this type exists solely for the PyO3 binding surface.
///
/// [`CostWeights`]: crate::swarm::core::weights::CostWeights
#[cfg(feature = "python-bindings")]
#[pyclass(module = "swarm_trajopt")]
pub struct SwarmProblem {
    /// Underlying Rust SwarmObjective.
    pub inner: SwarmObjective,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SwarmProblem {
    #[new]
    #[pyo3(
        signature = (
            start_vel,
            start_pos,
            target_vel,
            target_pos,
            timesteps,
            dt = None,
            w_vel = None,
            w_pos = None,
            w_col = None,
            min_dist = None,
        ),
        text_signature = "(start_vel, start_pos, target_vel, target_pos, timesteps, /, dt=0.5, \
                          w_vel=5.0, w_pos=5.0, w_col=0.5, min_dist=0.6)"
    )]
    pub fn new<'py>(
        start_vel: &Bound<'py, PyAny>, start_pos: &Bound<'py, PyAny>,
        target_vel: &Bound<'py, PyAny>, target_pos: &Bound<'py, PyAny>, timesteps: usize,
        dt: Option<f64>, w_vel: Option<f64>, w_pos: Option<f64>, w_col: Option<f64>,
        min_dist: Option<f64>,
    ) -> PyResult<Self> {
        let inner = build_objective(
            start_vel, start_pos, target_vel, target_pos, timesteps, dt, w_vel, w_pos, w_col,
            min_dist,
        )?;
        Ok(SwarmProblem { inner })
    }

    /// Full objective value (terminal boundary cost plus collision penalty)
    /// for a jerk tensor.
    #[pyo3(text_signature = "(self, jerks, /)")]
    pub fn cost<'py>(&self, jerks: &Bound<'py, PyAny>) -> PyResult<f64> {
        let jerk_tensor = extract_jerk_tensor(jerks)?;
        Ok(self.inner.cost(&jerk_tensor)?)
    }

    /// Analytic gradient of the full objective with respect to every jerk
    /// entry, as an `(agents, timesteps, dim)` numpy array.
    #[pyo3(text_signature = "(self, jerks, /)")]
    pub fn gradient<'py>(
        &self, py: Python<'py>, jerks: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray3<f64>>> {
        let jerk_tensor = extract_jerk_tensor(jerks)?;
        let grad = self.inner.gradient(&jerk_tensor)?;
        tensor_to_pyarray(py, &grad)
    }

    /// Integrated `(positions, velocities)` tensors for a jerk tensor, each
    /// shaped `(agents, timesteps, dim)`.
    #[pyo3(text_signature = "(self, jerks, /)")]
    pub fn trajectories<'py>(
        &self, py: Python<'py>, jerks: &Bound<'py, PyAny>,
    ) -> PyResult<(Bound<'py, PyArray3<f64>>, Bound<'py, PyArray3<f64>>)> {
        let jerk_tensor = extract_jerk_tensor(jerks)?;
        let trajectories = self.inner.trajectories(&jerk_tensor)?;
        Ok((
            tensor_to_pyarray(py, &trajectories.positions)?,
            tensor_to_pyarray(py, &trajectories.velocities)?,
        ))
    }

    #[pyo3(
        signature = (
            init_jerks = None,
            coarse_stepsize = None,
            coarse_cost_target = None,
            coarse_max_steps = None,
            fine_stepsize = None,
            fine_cost_target = None,
            fine_max_steps = None,
            beta1 = None,
            beta2 = None,
            epsilon = None,
            param_limit = None,
        ),
        text_signature = "(self, /, init_jerks=None, coarse_stepsize=0.01, coarse_cost_target=0.0, \
                          coarse_max_steps=50, fine_stepsize=0.005, fine_cost_target=0.05, \
                          fine_max_steps=4000, beta1=0.95, beta2=0.99, epsilon=1e-08, \
                          param_limit=0.1)"
    )]
    pub fn plan<'py>(
        &self, init_jerks: Option<&Bound<'py, PyAny>>, coarse_stepsize: Option<f64>,
        coarse_cost_target: Option<f64>, coarse_max_steps: Option<usize>,
        fine_stepsize: Option<f64>, fine_cost_target: Option<f64>, fine_max_steps: Option<usize>,
        beta1: Option<f64>, beta2: Option<f64>, epsilon: Option<f64>, param_limit: Option<f64>,
    ) -> PyResult<SwarmPlan> {
        let options = extract_plan_options(
            coarse_stepsize, coarse_cost_target, coarse_max_steps, fine_stepsize,
            fine_cost_target, fine_max_steps, beta1, beta2, epsilon, param_limit,
        )?;

        let init = match init_jerks {
            Some(raw) => extract_jerk_tensor(raw)?,
            None => Array3::zeros(self.inner.shape.jerk_dim()),
        };

        let outcome = plan(&self.inner, init, &options)?;
        Ok(SwarmPlan { inner: outcome })
    }

    #[getter]
    pub fn shape(&self) -> (usize, usize, usize) {
        self.inner.shape.jerk_dim()
    }

    #[getter]
    pub fn dt(&self) -> f64 {
        self.inner.coeffs.dt
    }

    #[getter]
    pub fn min_dist(&self) -> f64 {
        self.inner.weights.min_dist
    }
}

/// SwarmPlan — planned swarm trajectories exposed to Python.
///
/// Purpose
/// -------
/// Present the result of the two-phase descent schedule from [`PlanOutcome`]
/// to Python code in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the refined jerk tensor, the integrated position and velocity
///   tensors, and the per-phase descent diagnostics.
/// - Provide accessors that clone or copy the underlying values into
///   Python-owned containers.
///
/// Parameters
/// ----------
/// Instances are constructed internally by [`SwarmProblem::plan`] and are not
/// created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`PlanOutcome`]
///   Full planner result, including both phase outcomes and the final
///   trajectories.
///
/// Invariants
/// ----------
/// - The trajectories stored in `inner` were integrated from the fine-phase
///   jerk tensor of the same plan call.
///
/// Performance
/// -----------
/// - Tensor accessors are O(agents × timesteps × dim) when cloning into
///   numpy; scalar accessors are O(1).
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should prefer
///   using [`PlanOutcome`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "swarm_trajopt")]
pub struct SwarmPlan {
    /// Underlying Rust PlanOutcome.
    pub inner: PlanOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SwarmPlan {
    /// The refined jerk tensor, shaped `(agents, timesteps, dim)`.
    #[getter]
    pub fn jerks<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<f64>>> {
        tensor_to_pyarray(py, self.inner.jerks())
    }

    /// Integrated positions, shaped `(agents, timesteps, dim)`.
    #[getter]
    pub fn positions<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<f64>>> {
        tensor_to_pyarray(py, &self.inner.trajectories.positions)
    }

    /// Integrated velocities, shaped `(agents, timesteps, dim)`.
    #[getter]
    pub fn velocities<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<f64>>> {
        tensor_to_pyarray(py, &self.inner.trajectories.velocities)
    }

    /// Final full-objective cost after the fine phase.
    #[getter]
    pub fn cost(&self) -> f64 {
        self.inner.fine.cost
    }

    /// Whether the fine phase reached its cost target.
    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.fine.converged
    }

    /// Closest approach over the planned trajectories as
    /// `(distance, step, (first, second))`, or `None` for a single agent.
    #[getter]
    pub fn min_separation(&self) -> Option<(f64, usize, (usize, usize))> {
        self.inner.trajectories.min_separation().map(|m| (m.distance, m.step, m.pair))
    }

    /// Diagnostics for the collision-free warm-start phase.
    #[getter]
    pub fn coarse(&self) -> SwarmDescentOutcome {
        SwarmDescentOutcome { inner: self.inner.coarse.clone() }
    }

    /// Diagnostics for the full-gradient refinement phase.
    #[getter]
    pub fn fine(&self) -> SwarmDescentOutcome {
        SwarmDescentOutcome { inner: self.inner.fine.clone() }
    }
}

/// SwarmDescentOutcome — single-phase descent diagnostics exposed to Python.
///
/// Purpose
/// -------
/// Present the key driver diagnostics from [`DescentOutcome`] to Python code
/// in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the phase's refined jerk tensor and scalar diagnostics such as
///   final cost, convergence flag, status string, iteration count, evaluation
///   counters, and gradient norm.
/// - Provide accessors that clone or copy the underlying values into
///   Python-owned containers.
///
/// Parameters
/// ----------
/// Instances are constructed internally by the `SwarmPlan.coarse` and
/// `SwarmPlan.fine` getters and are not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`DescentOutcome`]
///   Full driver result for one descent phase.
///
/// Invariants
/// ----------
/// - `inner` always corresponds to one phase of the plan call that produced
///   the owning [`SwarmPlan`].
///
/// Performance
/// -----------
/// - The jerk accessor is O(agents × timesteps × dim) when cloning into
///   numpy; other fields are scalar copies.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should prefer
///   using [`DescentOutcome`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "swarm_trajopt")]
pub struct SwarmDescentOutcome {
    /// Underlying Rust DescentOutcome.
    pub inner: DescentOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SwarmDescentOutcome {
    #[getter]
    pub fn jerks<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<f64>>> {
        tensor_to_pyarray(py, &self.inner.params_hat)
    }

    #[getter]
    pub fn cost(&self) -> f64 {
        self.inner.cost
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn cost_evals(&self) -> usize {
        self.inner.cost_evals
    }

    #[getter]
    pub fn grad_evals(&self) -> usize {
        self.inner.grad_evals
    }

    #[getter]
    pub fn grad_norm(&self) -> Option<f64> {
        self.inner.grad_norm
    }
}

/// Evenly spaced circular formation as an `(agents, 3)` numpy array.
///
/// Agents sit on a circle of the given radius at altitude `1.0`, starting at
/// `offset_degrees` and advancing by `360 / agents` degrees per agent. Pairing
/// a formation with its `offset_degrees + 180` counterpart yields the crossing
/// start/target layout used by the swap scenarios.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (agents, radius, offset_degrees = None),
    text_signature = "(agents, radius, /, offset_degrees=0.0)"
)]
pub fn circle_formation<'py>(
    py: Python<'py>, agents: usize, radius: f64, offset_degrees: Option<f64>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let formation =
        crate::swarm::formations::circle_formation(agents, radius, offset_degrees.unwrap_or(0.0))?;
    matrix_to_pyarray(py, &formation)
}

/// _swarm_trajopt — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_swarm_trajopt` Python module consumed by the public
/// `swarm_trajopt` package.
///
/// Key behaviors
/// -------------
/// - Register the `SwarmProblem`, `SwarmPlan`, and `SwarmDescentOutcome`
///   classes on the module.
/// - Register the `circle_formation` helper function.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_swarm_trajopt`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If adding a class or function to the module fails.
///
/// Panics
/// ------
/// - Never panics under normal operation; all failures are mapped into
///   `PyErr`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _swarm_trajopt<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<SwarmProblem>()?;
    m.add_class::<SwarmPlan>()?;
    m.add_class::<SwarmDescentOutcome>()?;
    m.add_function(wrap_pyfunction!(circle_formation, m)?)?;
    Ok(())
}
