//! Numerical stability utilities.
//!
//! Provides guarded helpers for the near-singular geometry that shows up in
//! pairwise collision terms, where two agents can pass arbitrarily close to
//! each other and inter-agent distances approach zero.
//!
//! # Provided items
//! - [`SEPARATION_FLOOR`]: a tiny ε floor (default 1e-12) for inter-agent
//!   separation distances used as divisors.
//! - [`floor_separation(dist)`]: clamps a separation distance away from
//!   zero before it is used as a normalization denominator.
//!
//! # Rationale
//! Collision penalties differentiate through `diff / ‖diff‖`. The raw
//! distance stays meaningful for activation tests and penalty magnitudes,
//! but as a divisor it must be kept away from zero so coincident or
//! near-coincident agents produce a zero direction instead of NaN/∞.

/// Floor for inter-agent separation distances used as divisors.
///
/// Applied only where a distance appears in a denominator (unit-direction
/// normalization). Activation tests and penalty magnitudes always use the
/// raw distance, so the floor never changes *whether* a collision term
/// fires, only keeps its direction finite.
pub const SEPARATION_FLOOR: f64 = 1e-12;

/// Clamp a separation distance away from zero for use as a divisor.
///
/// For exactly coincident agents the difference vector is zero, so dividing
/// by the floored distance yields a zero direction rather than NaN.
///
/// # Parameters
/// - `dist`: a non-negative separation distance.
///
/// # Returns
/// - `max(dist, SEPARATION_FLOOR)`.
pub fn floor_separation(dist: f64) -> f64 {
    dist.max(SEPARATION_FLOOR)
}
