//! ## Purpose
//! Roll a jerk tensor forward into velocity and position trajectories in
//! closed form, and provide the swarm-wide separation diagnostic.
//!
//! ## Discretization
//! Jerk column `i` is held constant for one step of `dt`. Triple
//! integration then gives, for sample `k + 1`,
//!
//! - `V[k+1] = v0 + Σ_{i=0..=k} vel[k−i] · J[i]`
//! - `P[k+1] = p0 + (k+1)·dt·v0 + Σ_{i=0..=k} pos[k−i] · J[i]`
//!
//! with the lag tables from [`LagCoefficients`]. Sample 0 is pinned to the
//! boundary's start state. The final jerk column (index `timesteps − 1`)
//! never appears in any sum and is inert by construction.
//!
//! ## Assumptions
//! Inputs are shape-consistent and finite; validation happens at the
//! objective boundary before this code runs.
use crate::swarm::core::{boundary::BoundaryConditions, coefficients::LagCoefficients};
use ndarray::{s, Array2, Array3};

/// Velocity and position samples for every agent, `(agents, timesteps,
/// dim)` each, with sample 0 equal to the start state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectories {
    pub positions: Array3<f64>,
    pub velocities: Array3<f64>,
}

/// Closest approach between any two agents over the whole trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinSeparation {
    /// Euclidean distance at the closest approach.
    pub distance: f64,
    /// Sample index at which it occurs.
    pub step: usize,
    /// The two agents involved, `(lower, higher)`.
    pub pair: (usize, usize),
}

impl Trajectories {
    /// Smallest pairwise distance over all agent pairs and samples.
    ///
    /// Returns `None` for swarms with fewer than two agents. Ties keep the
    /// first occurrence in `(pair, step)` scan order.
    pub fn min_separation(&self) -> Option<MinSeparation> {
        let (agents, timesteps, _) = self.positions.dim();
        let mut best: Option<MinSeparation> = None;
        for a1 in 0..agents {
            for a2 in (a1 + 1)..agents {
                for step in 0..timesteps {
                    let diff = &self.positions.slice(s![a1, step, ..])
                        - &self.positions.slice(s![a2, step, ..]);
                    let distance = diff.iter().map(|d| d * d).sum::<f64>().sqrt();
                    if best.as_ref().map_or(true, |b| distance < b.distance) {
                        best = Some(MinSeparation { distance, step, pair: (a1, a2) });
                    }
                }
            }
        }
        best
    }
}

/// Integrate a jerk tensor into trajectories for every agent at once.
///
/// The inner sums follow the closed forms above; each output sample is a
/// lag-weighted combination of all earlier jerk columns, so the whole pass
/// is O(timesteps² · agents · dim).
pub fn integrate_trajectories(
    jerks: &Array3<f64>, boundary: &BoundaryConditions, coeffs: &LagCoefficients,
) -> Trajectories {
    let (agents, timesteps, dim) = jerks.dim();
    let mut velocities = Array3::<f64>::zeros((agents, timesteps, dim));
    let mut positions = Array3::<f64>::zeros((agents, timesteps, dim));
    velocities.slice_mut(s![.., 0, ..]).assign(&boundary.start_vel);
    positions.slice_mut(s![.., 0, ..]).assign(&boundary.start_pos);

    for k in 0..timesteps - 1 {
        let mut vel_sum = Array2::<f64>::zeros((agents, dim));
        let mut pos_sum = Array2::<f64>::zeros((agents, dim));
        for i in 0..=k {
            let lag = k - i;
            let column = jerks.slice(s![.., i, ..]);
            vel_sum.scaled_add(coeffs.vel[lag], &column);
            pos_sum.scaled_add(coeffs.pos[lag], &column);
        }

        vel_sum += &boundary.start_vel;
        velocities.slice_mut(s![.., k + 1, ..]).assign(&vel_sum);

        let drift = (k + 1) as f64 * coeffs.dt;
        pos_sum.scaled_add(drift, &boundary.start_vel);
        pos_sum += &boundary.start_pos;
        positions.slice_mut(s![.., k + 1, ..]).assign(&pos_sum);
    }

    Trajectories { positions, velocities }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swarm::core::shape::SwarmShape;
    use ndarray::Array3;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Ballistic motion under zero jerk.
    // - Closed-form response to a single jerk impulse.
    // - The stepwise kinematic identities the closed forms must satisfy,
    //   checked on a random tensor.
    // - The min-separation diagnostic.
    //
    // These tests intentionally DO NOT cover:
    // - Input validation (see the objective and boundary tests).
    // -------------------------------------------------------------------------

    fn boundary_at_rest(shape: &SwarmShape) -> BoundaryConditions {
        let dim = shape.boundary_dim();
        BoundaryConditions::new(
            ndarray::Array2::zeros(dim),
            ndarray::Array2::zeros(dim),
            ndarray::Array2::zeros(dim),
            ndarray::Array2::zeros(dim),
            shape,
        )
        .unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify that zero jerk produces ballistic motion: constant velocity
    // and linear position drift.
    //
    // Given
    // -----
    // - One agent in 2-D, 5 samples, dt = 0.5, v0 = (1, −2), p0 = (0.5, 3).
    //
    // Expect
    // ------
    // - `V[k] == v0` and `P[k] == p0 + k·dt·v0` for every sample.
    fn integrate_zero_jerk_is_ballistic() {
        let shape = SwarmShape::new(1, 5, 2).unwrap();
        let coeffs = LagCoefficients::new(5, 0.5).unwrap();
        let start_vel = ndarray::array![[1.0, -2.0]];
        let start_pos = ndarray::array![[0.5, 3.0]];
        let boundary = BoundaryConditions::new(
            start_vel.clone(),
            start_pos.clone(),
            ndarray::Array2::zeros((1, 2)),
            ndarray::Array2::zeros((1, 2)),
            &shape,
        )
        .unwrap();
        let jerks = Array3::<f64>::zeros(shape.jerk_dim());

        let traj = integrate_trajectories(&jerks, &boundary, &coeffs);

        for k in 0..5 {
            for d in 0..2 {
                let v = traj.velocities[(0, k, d)];
                let p = traj.positions[(0, k, d)];
                assert!((v - start_vel[(0, d)]).abs() < 1e-12);
                let expected_p = start_pos[(0, d)] + k as f64 * 0.5 * start_vel[(0, d)];
                assert!((p - expected_p).abs() < 1e-12);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin the lag-to-sample mapping with a unit jerk impulse in the first
    // column: sample `k + 1` must see the impulse at lag `k`.
    //
    // Given
    // -----
    // - One agent in 1-D at rest, 4 samples, dt = 0.5, J[0] = 1.
    //
    // Expect
    // ------
    // - `V[k+1] = 0.25·(k + 0.5)` and `P[k+1] = 0.0625·(k² + k + 1/3)`.
    fn integrate_single_impulse_matches_closed_form() {
        let shape = SwarmShape::new(1, 4, 1).unwrap();
        let coeffs = LagCoefficients::new(4, 0.5).unwrap();
        let boundary = boundary_at_rest(&shape);
        let mut jerks = Array3::<f64>::zeros(shape.jerk_dim());
        jerks[(0, 0, 0)] = 1.0;

        let traj = integrate_trajectories(&jerks, &boundary, &coeffs);

        assert_eq!(traj.velocities[(0, 0, 0)], 0.0);
        assert_eq!(traj.positions[(0, 0, 0)], 0.0);
        for k in 0..3usize {
            let l = k as f64;
            let expected_v = 0.25 * (l + 0.5);
            let expected_p = 0.0625 * (l * l + l + 1.0 / 3.0);
            assert!((traj.velocities[(0, k + 1, 0)] - expected_v).abs() < 1e-12);
            assert!((traj.positions[(0, k + 1, 0)] - expected_p).abs() < 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the closed forms against the stepwise kinematics of
    // piecewise-constant jerk on a random tensor:
    //   V[k+1] − V[k] = dt²·(0.5·J[k] + Σ_{i<k} J[i])
    //   P[k+1] − P[k] = dt·V[k] + 0.5·dt²·A[k] + (dt³/6)·J[k]
    // with A[k] = dt·Σ_{i<k} J[i] the accumulated acceleration.
    //
    // Given
    // -----
    // - Two agents in 3-D, 7 samples, dt = 0.5, seeded uniform jerks and
    //   start velocities.
    //
    // Expect
    // ------
    // - Both identities hold elementwise to 1e-12 at every step.
    fn integrate_satisfies_stepwise_kinematics() {
        let shape = SwarmShape::new(2, 7, 3).unwrap();
        let dt = 0.5;
        let coeffs = LagCoefficients::new(7, dt).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let jerks = Array3::random_using(shape.jerk_dim(), Uniform::new(-0.1, 0.1), &mut rng);
        let start_vel =
            ndarray::Array2::random_using(shape.boundary_dim(), Uniform::new(-0.2, 0.2), &mut rng);
        let boundary = BoundaryConditions::new(
            start_vel,
            ndarray::Array2::zeros(shape.boundary_dim()),
            ndarray::Array2::zeros(shape.boundary_dim()),
            ndarray::Array2::zeros(shape.boundary_dim()),
            &shape,
        )
        .unwrap();

        let traj = integrate_trajectories(&jerks, &boundary, &coeffs);

        let mut jerk_sum = ndarray::Array2::<f64>::zeros(shape.boundary_dim());
        for k in 0..6 {
            let column = jerks.slice(s![.., k, ..]);
            let dv = &traj.velocities.slice(s![.., k + 1, ..])
                - &traj.velocities.slice(s![.., k, ..]);
            let expected_dv = (&jerk_sum + &(&column * 0.5)) * dt * dt;
            let dp = &traj.positions.slice(s![.., k + 1, ..])
                - &traj.positions.slice(s![.., k, ..]);
            let accel = &jerk_sum * dt;
            let expected_dp = &(&traj.velocities.slice(s![.., k, ..]) * dt)
                + &(&(&accel * (0.5 * dt * dt)) + &(&column * (dt * dt * dt / 6.0)));

            for (dv_err, dp_err) in
                (&dv - &expected_dv).iter().zip((&dp - &expected_dp).iter())
            {
                assert!(dv_err.abs() < 1e-12);
                assert!(dp_err.abs() < 1e-12);
            }
            jerk_sum += &column;
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the separation diagnostic reports the closest pair, its step,
    // and the distance, and returns `None` for a single agent.
    //
    // Given
    // -----
    // - Two agents whose distance at steps 0..3 is 5.0, then 0.5, then 7.0.
    //
    // Expect
    // ------
    // - `Some(MinSeparation { distance: 0.5, step: 1, pair: (0, 1) })`.
    // - `None` when only one agent's trajectory is present.
    fn min_separation_reports_closest_pair_and_step() {
        let positions = Array3::from_shape_vec(
            (2, 3, 2),
            vec![
                0.0, 0.0, 1.0, 0.0, 2.0, 0.0, // agent 0
                5.0, 0.0, 1.5, 0.0, 9.0, 0.0, // agent 1
            ],
        )
        .unwrap();
        let traj = Trajectories {
            positions: positions.clone(),
            velocities: Array3::zeros((2, 3, 2)),
        };

        let closest = traj.min_separation().unwrap();

        assert!((closest.distance - 0.5).abs() < 1e-12);
        assert_eq!(closest.step, 1);
        assert_eq!(closest.pair, (0, 1));

        let solo = Trajectories {
            positions: positions.slice(s![0..1, .., ..]).to_owned(),
            velocities: Array3::zeros((1, 3, 2)),
        };
        assert_eq!(solo.min_separation(), None);
    }
}
