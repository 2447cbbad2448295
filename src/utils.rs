use ndarray::{Array2, Array3};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::descent::traits::AdamOptions,
    swarm::{
        core::{boundary::BoundaryConditions, shape::SwarmShape, weights::CostWeights},
        models::objective::SwarmObjective,
        planner::PlanOptions,
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArray2,
    PyArray3,
    PyArrayMethods, // .reshape()
    PyReadonlyArray2,
    PyReadonlyArray3,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_matrix<'py>(
    raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return matrix_from_numpy(&arr_ro, name);
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return matrix_from_numpy(&frame_ro, name);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(format!(
            "{name} must be a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64"
        ))
    })?;
    matrix_from_rows(rows, name).map_err(PyValueError::new_err)
}

// numpy carries its own ndarray, which need not match the crate's pinned
// version. Data crosses the boundary as slices, element iterators, and plain
// shape tuples only, never as ndarray types.
#[cfg(feature = "python-bindings")]
fn matrix_from_numpy(arr_ro: &PyReadonlyArray2<'_, f64>, name: &str) -> PyResult<Array2<f64>> {
    let view = arr_ro.as_array();
    let data: Vec<f64> = match arr_ro.as_slice() {
        Ok(slice) => slice.to_vec(),
        Err(_) => view.iter().copied().collect(),
    };
    Array2::from_shape_vec(view.dim(), data)
        .map_err(|e| PyValueError::new_err(format!("{name} could not be shaped: {e}")))
}

pub fn matrix_from_rows(rows: Vec<Vec<f64>>, name: &str) -> Result<Array2<f64>, String> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);

    let mut flat = Vec::with_capacity(nrows * ncols);
    for row in &rows {
        if row.len() != ncols {
            return Err(format!(
                "{name} rows must all have length {ncols}, found a row of length {}",
                row.len()
            ));
        }
        flat.extend_from_slice(row);
    }

    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| format!("{name} could not be shaped: {e}"))
}

#[cfg(feature = "python-bindings")]
pub fn extract_jerk_tensor<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<Array3<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray3<f64>>() {
        return tensor_from_numpy(&arr_ro);
    }

    let blocks: Vec<Vec<Vec<f64>>> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "jerks must be a 3-D numpy.ndarray or nested sequence of float64 \
             with shape (agents, timesteps, dim)",
        )
    })?;
    tensor_from_blocks(blocks).map_err(PyValueError::new_err)
}

#[cfg(feature = "python-bindings")]
fn tensor_from_numpy(arr_ro: &PyReadonlyArray3<'_, f64>) -> PyResult<Array3<f64>> {
    let view = arr_ro.as_array();
    let data: Vec<f64> = match arr_ro.as_slice() {
        Ok(slice) => slice.to_vec(),
        Err(_) => view.iter().copied().collect(),
    };
    Array3::from_shape_vec(view.dim(), data)
        .map_err(|e| PyValueError::new_err(format!("jerks could not be shaped: {e}")))
}

pub fn tensor_from_blocks(blocks: Vec<Vec<Vec<f64>>>) -> Result<Array3<f64>, String> {
    let agents = blocks.len();
    let timesteps = blocks.first().map_or(0, Vec::len);
    let dim = blocks.first().and_then(|block| block.first()).map_or(0, Vec::len);

    let mut flat = Vec::with_capacity(agents * timesteps * dim);
    for block in &blocks {
        if block.len() != timesteps {
            return Err(format!(
                "jerks must cover {timesteps} timesteps for every agent, found {}",
                block.len()
            ));
        }
        for row in block {
            if row.len() != dim {
                return Err(format!(
                    "jerks must have {dim} spatial components per timestep, found {}",
                    row.len()
                ));
            }
            flat.extend_from_slice(row);
        }
    }

    Array3::from_shape_vec((agents, timesteps, dim), flat)
        .map_err(|e| format!("jerks could not be shaped: {e}"))
}

#[cfg(feature = "python-bindings")]
pub fn matrix_to_pyarray<'py>(
    py: Python<'py>, matrix: &Array2<f64>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let flat: Vec<f64> = matrix.iter().copied().collect();
    flat.into_pyarray(py).reshape(matrix.dim())
}

#[cfg(feature = "python-bindings")]
pub fn tensor_to_pyarray<'py>(
    py: Python<'py>, tensor: &Array3<f64>,
) -> PyResult<Bound<'py, PyArray3<f64>>> {
    let flat: Vec<f64> = tensor.iter().copied().collect();
    flat.into_pyarray(py).reshape(tensor.dim())
}

#[cfg(feature = "python-bindings")]
pub fn build_objective<'py>(
    start_vel: &Bound<'py, PyAny>, start_pos: &Bound<'py, PyAny>, target_vel: &Bound<'py, PyAny>,
    target_pos: &Bound<'py, PyAny>, timesteps: usize, dt: Option<f64>, w_vel: Option<f64>,
    w_pos: Option<f64>, w_col: Option<f64>, min_dist: Option<f64>,
) -> PyResult<SwarmObjective> {
    let start_vel = extract_f64_matrix(start_vel, "start_vel")?;
    let start_pos = extract_f64_matrix(start_pos, "start_pos")?;
    let target_vel = extract_f64_matrix(target_vel, "target_vel")?;
    let target_pos = extract_f64_matrix(target_pos, "target_pos")?;

    // Agent count and spatial dimension are read off the starting positions.
    let (agents, dim) = start_pos.dim();
    let shape = SwarmShape::new(agents, timesteps, dim)?;
    let boundary = BoundaryConditions::new(start_vel, start_pos, target_vel, target_pos, &shape)?;

    let weights = extract_weights(w_vel, w_pos, w_col, min_dist)?;
    let dt_val = dt.unwrap_or(0.5);

    Ok(SwarmObjective::new(shape, boundary, weights, dt_val)?)
}

#[cfg(feature = "python-bindings")]
fn extract_weights(
    w_vel: Option<f64>, w_pos: Option<f64>, w_col: Option<f64>, min_dist: Option<f64>,
) -> PyResult<CostWeights> {
    let defaults = CostWeights::default();

    // CostWeights::new -> SwarmResult<CostWeights> -> PyErr
    let weights = CostWeights::new(
        w_vel.unwrap_or(defaults.w_vel),
        w_pos.unwrap_or(defaults.w_pos),
        w_col.unwrap_or(defaults.w_col),
        min_dist.unwrap_or(defaults.min_dist),
    )?;

    Ok(weights)
}

#[cfg(feature = "python-bindings")]
pub fn extract_plan_options(
    coarse_stepsize: Option<f64>, coarse_cost_target: Option<f64>, coarse_max_steps: Option<usize>,
    fine_stepsize: Option<f64>, fine_cost_target: Option<f64>, fine_max_steps: Option<usize>,
    beta1: Option<f64>, beta2: Option<f64>, epsilon: Option<f64>, param_limit: Option<f64>,
) -> PyResult<PlanOptions> {
    let defaults = PlanOptions::default();

    let coarse = extract_phase_opts(
        &defaults.coarse, coarse_stepsize, coarse_cost_target, coarse_max_steps, beta1, beta2,
        epsilon, param_limit,
    )?;
    let fine = extract_phase_opts(
        &defaults.fine, fine_stepsize, fine_cost_target, fine_max_steps, beta1, beta2, epsilon,
        param_limit,
    )?;

    Ok(PlanOptions::new(coarse, fine))
}

#[cfg(feature = "python-bindings")]
fn extract_phase_opts(
    base: &AdamOptions, stepsize: Option<f64>, cost_target: Option<f64>, max_steps: Option<usize>,
    beta1: Option<f64>, beta2: Option<f64>, epsilon: Option<f64>, param_limit: Option<f64>,
) -> PyResult<AdamOptions> {
    // AdamOptions::new -> OptResult<AdamOptions> -> PyErr
    let opts = AdamOptions::new(
        stepsize.unwrap_or(base.stepsize),
        beta1.unwrap_or(base.beta1),
        beta2.unwrap_or(base.beta2),
        epsilon.unwrap_or(base.epsilon),
        cost_target.unwrap_or(base.cost_target),
        max_steps.unwrap_or(base.max_steps),
        param_limit.unwrap_or(base.param_limit),
    )?;

    Ok(opts)
}
