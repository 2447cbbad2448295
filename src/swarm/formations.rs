//! Formation helpers for boundary-condition construction.
//!
//! ## Purpose
//! Generate the standard start/target position matrices used by swarm
//! scenarios. The only shape currently provided is the evenly-spaced
//! circle: agents distributed counter-clockwise at a fixed flight altitude,
//! with an angular offset so the same call produces both a formation and
//! its antipodal target (offset 180°).
//!
//! ## Conventions
//! - Output matrices are `(agents, 3)` in x, y, z order with `z` fixed at
//!   1.0; circle formations are inherently three-dimensional.
//! - Angles are supplied in degrees and converted internally; agent `i`
//!   sits at `i · 360/agents + offset` degrees.
//!
//! ## Testing notes
//! - Tests pin the cardinal positions of a small circle, the antipodal
//!   mirror property, and rejection of degenerate parameters.
use crate::swarm::errors::{SwarmError, SwarmResult};
use ndarray::Array2;

/// Place `agents` evenly on a circle of `radius`, rotated by
/// `offset_degrees`.
///
/// Parameters
/// ----------
/// - `agents`: `usize`
///   Number of rows to produce; at least 1.
/// - `radius`: `f64`
///   Circle radius in the x/y plane; finite and non-negative (zero stacks
///   every agent at the center).
/// - `offset_degrees`: `f64`
///   Rotation applied to every agent's angle, in degrees; finite. Pass
///   `180.0` to obtain the antipodal counterpart of an earlier call.
///
/// Returns
/// -------
/// `SwarmResult<Array2<f64>>`
///   An `(agents, 3)` matrix of positions `(radius·cos θ, radius·sin θ,
///   1.0)` with `θ = (i · 360/agents + offset_degrees)` in radians.
///
/// Errors
/// ------
/// - `SwarmError::InvalidSwarmShape`
///   If `agents` is zero.
/// - `SwarmError::InvalidFormation`
///   If `radius` is non-finite or negative, or `offset_degrees` is
///   non-finite.
pub fn circle_formation(
    agents: usize, radius: f64, offset_degrees: f64,
) -> SwarmResult<Array2<f64>> {
    if agents == 0 {
        return Err(SwarmError::InvalidSwarmShape {
            param: agents,
            reason: "A formation needs at least one agent.",
        });
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(SwarmError::InvalidFormation {
            value: radius,
            reason: "Radius must be finite and non-negative.",
        });
    }
    if !offset_degrees.is_finite() {
        return Err(SwarmError::InvalidFormation {
            value: offset_degrees,
            reason: "Angle offset must be finite.",
        });
    }

    let spacing = 360.0 / agents as f64;
    let mut formation = Array2::zeros((agents, 3));
    for (index, mut row) in formation.rows_mut().into_iter().enumerate() {
        let angle = (index as f64 * spacing + offset_degrees).to_radians();
        row[0] = radius * angle.cos();
        row[1] = radius * angle.sin();
        row[2] = 1.0;
    }
    Ok(formation)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Cardinal positions of a four-agent unit circle.
    // - The antipodal mirror property used by the reference scenario.
    // - Rejection of zero agents and non-finite / negative parameters.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Four agents on the unit circle land on the four cardinal points,
    // counter-clockwise from the positive x axis, at altitude 1.
    //
    // Given
    // -----
    // - `circle_formation(4, 1.0, 0.0)`.
    //
    // Expect
    // ------
    // - Rows (1,0,1), (0,1,1), (−1,0,1), (0,−1,1) within 1e-12.
    fn four_agents_land_on_cardinal_points() {
        // Arrange + Act
        let formation = circle_formation(4, 1.0, 0.0).unwrap();

        // Assert
        let expected = [
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [-1.0, 0.0, 1.0],
            [0.0, -1.0, 1.0],
        ];
        for (row, want) in formation.rows().into_iter().zip(expected.iter()) {
            for (value, target) in row.iter().zip(want.iter()) {
                assert!((value - target).abs() < 1e-12, "got {value}, wanted {target}");
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // A 180° offset mirrors every agent through the circle's center while
    // keeping the altitude, which is how start/target pairs are built.
    //
    // Given
    // -----
    // - A five-agent circle of radius 2.5 and its 180°-offset counterpart.
    //
    // Expect
    // ------
    // - Each target row is (−x, −y, 1) of the matching start row within
    //   1e-12.
    fn antipodal_offset_mirrors_the_formation() {
        // Arrange + Act
        let starts = circle_formation(5, 2.5, 0.0).unwrap();
        let targets = circle_formation(5, 2.5, 180.0).unwrap();

        // Assert
        for (start, target) in starts.rows().into_iter().zip(targets.rows()) {
            assert!((start[0] + target[0]).abs() < 1e-12);
            assert!((start[1] + target[1]).abs() < 1e-12);
            assert!((target[2] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Degenerate parameters are rejected with the matching error variants.
    //
    // Given
    // -----
    // - Zero agents, a negative radius, and a NaN offset.
    //
    // Expect
    // ------
    // - `InvalidSwarmShape` for the count, `InvalidFormation` for the rest.
    fn rejects_degenerate_parameters() {
        // Act + Assert
        assert!(matches!(
            circle_formation(0, 1.0, 0.0),
            Err(SwarmError::InvalidSwarmShape { .. })
        ));
        assert!(matches!(
            circle_formation(3, -1.0, 0.0),
            Err(SwarmError::InvalidFormation { .. })
        ));
        assert!(matches!(
            circle_formation(3, 1.0, f64::NAN),
            Err(SwarmError::InvalidFormation { .. })
        ));
    }
}
