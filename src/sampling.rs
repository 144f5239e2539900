//! The pre-step sampling loop and its fixed time grid.
//!
//! At every grid point the tables are filled from the current system state
//! first, and only then is the simulation advanced to that point. Column i of
//! each table therefore reports the state strictly before the i-th
//! integration step commits.

use planets_core::vector::{self, Vector3};
use planets_nbody::{Primary, SimulationError};

use crate::systems::PlanetarySystem;

/// An ordered, evenly spaced grid of `len` time values from `start` to `end`
/// inclusive.
pub fn time_grid(start: f64, end: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (len - 1) as f64;
            (0..len).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Sampled output of one run.
///
/// The two tables are indexed `[body - 1][time]`, one row per sampled body
/// (everything but the primary), pre-filled with NaN and written
/// left-to-right. `positions` snapshots every particle, primary included,
/// per grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRun {
    pub times: Vec<f64>,
    pub semi_major_axes: Vec<Vec<f64>>,
    pub distances: Vec<Vec<f64>>,
    pub positions: Vec<Vec<Vector3>>,
}

impl SampleRun {
    fn with_capacity(n_sampled: usize, times: &[f64]) -> Self {
        Self {
            times: times.to_vec(),
            semi_major_axes: vec![vec![f64::NAN; times.len()]; n_sampled],
            distances: vec![vec![f64::NAN; times.len()]; n_sampled],
            positions: Vec::with_capacity(times.len()),
        }
    }
}

/// Run the sampling loop over `times`, advancing the system in place.
///
/// `progress` is invoked once per grid point with the step index and target
/// time, before sampling. Satellites are read out relative to their declared
/// primary; every other body gets the direct (Jacobi) orbital-element report.
/// Any engine failure aborts the run and propagates.
pub fn run(
    system: &mut PlanetarySystem,
    times: &[f64],
    mut progress: impl FnMut(usize, f64),
) -> Result<SampleRun, SimulationError> {
    let n = system.sim.len();
    if n == 0 {
        return Err(SimulationError::Empty);
    }
    let mut out = SampleRun::with_capacity(n - 1, times);

    for (i, &t) in times.iter().enumerate() {
        progress(i, t);

        let primary_pos = system.sim.particle(0)?.pos;
        out.positions
            .push(system.sim.particles().iter().map(|p| p.pos).collect());

        for j in 1..n {
            let body = system.sim.particle(j)?;
            out.distances[j - 1][i] = vector::norm(&vector::sub(&body.pos, &primary_pos));

            let reference = match system.bodies.get(j).and_then(|b| b.satellite_of) {
                Some(k) => Primary::Body(k),
                None => Primary::Jacobi,
            };
            out.semi_major_axes[j - 1][i] = system.sim.orbit_of(j, reference)?.semi_major_axis;
        }

        system.sim.integrate(t);
    }
    Ok(out)
}
