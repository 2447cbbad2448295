use crate::swarm::errors::SwarmError;
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Gradient shape does not match parameter shape.
    GradientShapeMismatch {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },

    /// Gradient entries need to be finite.
    InvalidGradient {
        index: (usize, usize, usize),
        value: f64,
        reason: &'static str,
    },

    // ---- Driver options ----
    /// Step size needs to be positive and finite.
    InvalidStepsize {
        value: f64,
        reason: &'static str,
    },
    /// Momentum coefficient needs to lie in [0, 1).
    InvalidMomentum {
        value: f64,
        reason: &'static str,
    },
    /// Moment-decay coefficient needs to lie in [0, 1).
    InvalidBeta {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Adam epsilon needs to be positive and finite.
    InvalidEpsilon {
        value: f64,
        reason: &'static str,
    },
    /// Iteration budget needs to be positive.
    InvalidMaxSteps {
        max_steps: usize,
        reason: &'static str,
    },
    /// Cost target needs to be finite.
    InvalidCostTarget {
        value: f64,
        reason: &'static str,
    },
    /// Clipping limit needs to be positive and finite.
    InvalidParamLimit {
        value: f64,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Parameters / outcome ----
    /// Parameter tensor shape does not match the objective's shape.
    ParamsShapeMismatch {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },

    /// Parameter entries must be finite.
    InvalidParams {
        index: (usize, usize, usize),
        value: f64,
        reason: &'static str,
    },

    // ---- Engine passthrough ----
    /// Wrapper for engine errors without a dedicated variant.
    EngineError {
        text: String,
    },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientShapeMismatch { expected, found } => {
                write!(f, "Gradient shape mismatch: expected {expected:?}, found {found:?}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index:?}: {value}: {reason}")
            }

            // ---- Driver options ----
            OptError::InvalidStepsize { value, reason } => {
                write!(f, "Invalid step size {value}: {reason}")
            }
            OptError::InvalidMomentum { value, reason } => {
                write!(f, "Invalid momentum coefficient {value}: {reason}")
            }
            OptError::InvalidBeta { name, value, reason } => {
                write!(f, "Invalid {name} coefficient {value}: {reason}")
            }
            OptError::InvalidEpsilon { value, reason } => {
                write!(f, "Invalid epsilon {value}: {reason}")
            }
            OptError::InvalidMaxSteps { max_steps, reason } => {
                write!(f, "Invalid iteration budget {max_steps}: {reason}")
            }
            OptError::InvalidCostTarget { value, reason } => {
                write!(f, "Invalid cost target {value}: {reason}")
            }
            OptError::InvalidParamLimit { value, reason } => {
                write!(f, "Invalid parameter limit {value}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Parameters / outcome ----
            OptError::ParamsShapeMismatch { expected, found } => {
                write!(f, "Parameter shape mismatch: expected {expected:?}, found {found:?}")
            }
            OptError::InvalidParams { index, value, reason } => {
                write!(f, "Invalid parameter at index {index:?}: {value}: {reason}")
            }

            // ---- Engine passthrough ----
            OptError::EngineError { text } => {
                write!(f, "Engine error: {text}")
            }
        }
    }
}

impl From<SwarmError> for OptError {
    fn from(err: SwarmError) -> Self {
        match err {
            SwarmError::JerkShapeMismatch { expected, found } => {
                OptError::ParamsShapeMismatch { expected, found }
            }
            SwarmError::NonFiniteJerk { index, value } => OptError::InvalidParams {
                index,
                value,
                reason: "Jerk entries must be finite.",
            },
            other => OptError::EngineError { text: other.to_string() },
        }
    }
}

/// Convert an [`OptError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface optimizer errors
/// cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The `From<SwarmError>` conversion arms that keep structured payloads
    //   (jerk shape / jerk finiteness) and the text fallback for the rest.
    //
    // These tests intentionally DO NOT cover:
    // - Display formatting of every variant (exercised through driver and
    //   engine tests that match on messages).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify a jerk-tensor shape mismatch from the engine surfaces as the
    // optimizer's parameter shape mismatch with both shapes intact.
    //
    // Given
    // -----
    // - `SwarmError::JerkShapeMismatch` expecting (2, 5, 3), finding
    //   (2, 4, 3).
    //
    // Expect
    // ------
    // - `OptError::ParamsShapeMismatch` carrying the same shape pair.
    fn swarm_jerk_shape_mismatch_maps_to_params_shape_mismatch() {
        let err = SwarmError::JerkShapeMismatch { expected: (2, 5, 3), found: (2, 4, 3) };

        let converted = OptError::from(err);

        assert_eq!(
            converted,
            OptError::ParamsShapeMismatch { expected: (2, 5, 3), found: (2, 4, 3) }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify a non-finite jerk entry surfaces as an invalid-parameter error
    // preserving the offending index and value.
    //
    // Given
    // -----
    // - `SwarmError::NonFiniteJerk` at index (1, 3, 0) with value NaN.
    //
    // Expect
    // ------
    // - `OptError::InvalidParams` at the same index with a NaN payload.
    fn swarm_non_finite_jerk_maps_to_invalid_params() {
        let err = SwarmError::NonFiniteJerk { index: (1, 3, 0), value: f64::NAN };

        let converted = OptError::from(err);

        match converted {
            OptError::InvalidParams { index, value, .. } => {
                assert_eq!(index, (1, 3, 0));
                assert!(value.is_nan());
            }
            other => panic!("expected InvalidParams, found {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify engine errors without a dedicated optimizer variant fall back
    // to the text wrapper, keeping the original message.
    //
    // Given
    // -----
    // - `SwarmError::InvalidTimestep` for a negative duration.
    //
    // Expect
    // ------
    // - `OptError::EngineError` whose text is the swarm error's Display
    //   output.
    fn swarm_errors_without_counterpart_fall_back_to_engine_error() {
        let err = SwarmError::InvalidTimestep { value: -0.5 };
        let expected_text = err.to_string();

        let converted = OptError::from(err);

        assert_eq!(converted, OptError::EngineError { text: expected_text });
    }
}
