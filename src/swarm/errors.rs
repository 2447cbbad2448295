//! Errors for the swarm trajectory engine (shape/boundary validation,
//! weight checks, and jerk-tensor invariants).
//!
//! This module defines the engine error type, [`SwarmError`], used across the
//! Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** and reported as the first offending entry.
//! - Boundary arrays are `(agents, dim)`; jerk tensors are
//!   `(agents, timesteps, dim)`.
//! - All numeric inputs must be finite; weights must be non-negative and the
//!   separation threshold strictly positive.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for swarm-engine operations that may produce
/// [`SwarmError`].
pub type SwarmResult<T> = Result<T, SwarmError>;

/// Unified error type for the swarm trajectory engine.
///
/// Covers swarm-shape validation, boundary-condition validation, weight and
/// timestep checks, jerk-tensor invariants, and formation construction.
/// Implements `Display`/`Error` and converts to a Python `ValueError` at
/// PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum SwarmError {
    // ---- Swarm shape ----
    /// Swarm dimensions must describe a non-degenerate optimization problem.
    InvalidSwarmShape { param: usize, reason: &'static str },

    // ---- Boundary conditions ----
    /// A boundary array's shape does not match `(agents, dim)`.
    BoundaryShapeMismatch {
        name: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A boundary array entry is NaN/±inf.
    NonFiniteBoundary {
        name: &'static str,
        index: (usize, usize),
        value: f64,
    },

    // ---- Weights / timestep ----
    /// Cost weights must be finite and non-negative.
    InvalidWeight { name: &'static str, value: f64 },

    /// Minimum separation distance must be finite and strictly positive.
    InvalidMinDist { value: f64 },

    /// Timestep duration must be finite and strictly positive.
    InvalidTimestep { value: f64 },

    // ---- Jerk tensor ----
    /// Jerk tensor shape does not match `(agents, timesteps, dim)`.
    JerkShapeMismatch {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },

    /// A jerk entry is NaN/±inf.
    NonFiniteJerk { index: (usize, usize, usize), value: f64 },

    // ---- Formations ----
    /// Formation parameters must be finite (radius additionally non-negative).
    InvalidFormation { value: f64, reason: &'static str },
}

impl std::error::Error for SwarmError {}

impl std::fmt::Display for SwarmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Swarm shape ----
            SwarmError::InvalidSwarmShape { param, reason } => {
                write!(f, "Invalid swarm shape parameter {param}: {reason}")
            }
            // ---- Boundary conditions ----
            SwarmError::BoundaryShapeMismatch { name, expected, found } => {
                write!(f, "{name} shape mismatch: expected {expected:?}, found {found:?}")
            }
            SwarmError::NonFiniteBoundary { name, index, value } => {
                write!(f, "{name} entry at index {index:?} is non-finite: {value}")
            }
            // ---- Weights / timestep ----
            SwarmError::InvalidWeight { name, value } => {
                write!(f, "Invalid weight {name}: {value}, must be finite and non-negative")
            }
            SwarmError::InvalidMinDist { value } => {
                write!(
                    f,
                    "Invalid minimum separation distance: {value}, must be finite and > 0"
                )
            }
            SwarmError::InvalidTimestep { value } => {
                write!(f, "Invalid timestep duration: {value}, must be finite and > 0")
            }
            // ---- Jerk tensor ----
            SwarmError::JerkShapeMismatch { expected, found } => {
                write!(f, "Jerk tensor shape mismatch: expected {expected:?}, found {found:?}")
            }
            SwarmError::NonFiniteJerk { index, value } => {
                write!(f, "Jerk entry at index {index:?} is non-finite: {value}")
            }
            // ---- Formations ----
            SwarmError::InvalidFormation { value, reason } => {
                write!(f, "Invalid formation parameter {value}: {reason}")
            }
        }
    }
}

/// Convert a [`SwarmError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<SwarmError> for PyErr {
    fn from(err: SwarmError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
