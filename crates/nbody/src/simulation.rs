//! The owned simulation value: body registration, recentering, and time stepping.

use planets_core::vector;

use crate::elements::{
    self, OrbitalElements, eccentric_to_true_anomaly, period_to_sma, solve_kepler,
    state_from_elements,
};
use crate::integrator::verlet_step;
use crate::particle::Particle;
use crate::SimulationError;

/// Orbit size given either directly or through the orbital period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitSize {
    SemiMajorAxis(f64),
    Period(f64),
}

/// Orbit-based body registration parameters. Angles in radians; mass, length,
/// and time in the simulation's unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpec {
    pub m: f64,
    pub size: OrbitSize,
    pub e: f64,
    pub inc: f64,
    /// Argument of periapsis (ω).
    pub omega: f64,
    /// Longitude of the ascending node (Ω).
    pub big_omega: f64,
    /// True anomaly; ignored when `mean_anomaly` is set.
    pub true_anomaly: f64,
    pub mean_anomaly: Option<f64>,
}

impl OrbitSpec {
    /// A body of mass `m` on an orbit of semi-major axis `a`, at periapsis,
    /// with all other elements zero.
    pub fn from_sma(m: f64, a: f64) -> Self {
        Self {
            m,
            size: OrbitSize::SemiMajorAxis(a),
            e: 0.0,
            inc: 0.0,
            omega: 0.0,
            big_omega: 0.0,
            true_anomaly: 0.0,
            mean_anomaly: None,
        }
    }

    /// Like [`OrbitSpec::from_sma`], but sized by orbital period.
    pub fn from_period(m: f64, period: f64) -> Self {
        Self {
            size: OrbitSize::Period(period),
            ..Self::from_sma(m, f64::NAN)
        }
    }
}

/// Reference body for an orbital-element readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    /// Mass-weighted composite of all particles with a lower index.
    Jacobi,
    /// A specific particle by index.
    Body(usize),
}

/// An owned N-body simulation.
///
/// Particle indices are assigned in registration order and never change;
/// index 0 is conventionally the central (star-like) body.
#[derive(Debug, Clone)]
pub struct Simulation {
    g: f64,
    t: f64,
    dt: f64,
    particles: Vec<Particle>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// An empty simulation with G = 1 and the default internal step.
    pub fn new() -> Self {
        Self {
            g: 1.0,
            t: 0.0,
            dt: 1e-3,
            particles: Vec::new(),
        }
    }

    /// Gravitational constant in the declared unit system.
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Declare the unit system by fixing its gravitational constant.
    pub fn set_g(&mut self, g: f64) {
        self.g = g;
    }

    /// Current simulation time.
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Internal integration step size.
    pub fn timestep(&self) -> f64 {
        self.dt
    }

    /// Set the internal integration step size.
    pub fn set_timestep(&mut self, dt: f64) -> Result<(), SimulationError> {
        if dt <= 0.0 || !dt.is_finite() {
            return Err(SimulationError::NonPositiveTimestep(dt));
        }
        self.dt = dt;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Result<&Particle, SimulationError> {
        self.particles
            .get(index)
            .ok_or(SimulationError::IndexOutOfRange(index))
    }

    /// Register a body at rest at the origin. Returns its index.
    pub fn add(&mut self, m: f64) -> usize {
        self.particles.push(Particle::at_rest(m));
        self.particles.len() - 1
    }

    /// Register a body from orbital elements. Returns its index.
    ///
    /// With `primary = None` the elements are taken relative to the
    /// mass-weighted composite of everything registered so far; with
    /// `Some(k)` the body is a satellite of particle `k`. No physical
    /// plausibility checks are made: degenerate elements produce degenerate
    /// orbits, as the caller requested.
    pub fn add_orbit(
        &mut self,
        primary: Option<usize>,
        spec: OrbitSpec,
    ) -> Result<usize, SimulationError> {
        let reference = match primary {
            Some(k) => *self.particle(k)?,
            None => Particle::composite(&self.particles).ok_or(SimulationError::NoPrimary)?,
        };
        if reference.m <= 0.0 {
            return Err(SimulationError::MasslessPrimary);
        }

        let mu = self.g * (reference.m + spec.m);
        let semi_major_axis = match spec.size {
            OrbitSize::SemiMajorAxis(a) => a,
            OrbitSize::Period(period) => period_to_sma(period, mu),
        };
        let true_anomaly = match spec.mean_anomaly {
            Some(mean) => eccentric_to_true_anomaly(solve_kepler(mean, spec.e), spec.e),
            None => spec.true_anomaly,
        };

        let el = OrbitalElements {
            semi_major_axis,
            eccentricity: spec.e,
            inclination: spec.inc,
            ascending_node: spec.big_omega,
            arg_periapsis: spec.omega,
            true_anomaly,
        };
        let (rel_pos, rel_vel) = state_from_elements(&el, mu);

        self.particles.push(Particle {
            m: spec.m,
            pos: vector::add(&reference.pos, &rel_pos),
            vel: vector::add(&reference.vel, &rel_vel),
        });
        Ok(self.particles.len() - 1)
    }

    /// The reference particle a readout for `index` is taken against.
    pub fn primary_of(&self, index: usize, primary: Primary) -> Result<Particle, SimulationError> {
        if index >= self.particles.len() {
            return Err(SimulationError::IndexOutOfRange(index));
        }
        match primary {
            Primary::Jacobi => Particle::composite(&self.particles[..index])
                .ok_or(SimulationError::NoPrimary),
            Primary::Body(k) => {
                if k == index {
                    return Err(SimulationError::SelfPrimary(index));
                }
                Ok(*self.particle(k)?)
            }
        }
    }

    /// Current orbital elements of particle `index` relative to `primary`.
    pub fn orbit_of(
        &self,
        index: usize,
        primary: Primary,
    ) -> Result<OrbitalElements, SimulationError> {
        let reference = self.primary_of(index, primary)?;
        let body = self.particle(index)?;
        let mu = self.g * (reference.m + body.m);
        Ok(elements::elements_from_state(
            &vector::sub(&body.pos, &reference.pos),
            &vector::sub(&body.vel, &reference.vel),
            mu,
        ))
    }

    /// Shift positions and velocities into the center-of-mass frame.
    pub fn move_to_com(&mut self) -> Result<(), SimulationError> {
        let com = Particle::composite(&self.particles).ok_or(SimulationError::Empty)?;
        for p in &mut self.particles {
            p.pos = vector::sub(&p.pos, &com.pos);
            p.vel = vector::sub(&p.vel, &com.vel);
        }
        Ok(())
    }

    /// Advance the simulation to the absolute time `t_target`.
    ///
    /// The interval is cut into equal substeps no larger than the internal
    /// step so the integrator lands exactly on the target; a target at or
    /// before the current time is a no-op.
    pub fn integrate(&mut self, t_target: f64) {
        let span = t_target - self.t;
        if span <= 0.0 || !span.is_finite() {
            return;
        }
        let substeps = (span / self.dt).ceil().max(1.0) as u64;
        let h = span / substeps as f64;
        for _ in 0..substeps {
            verlet_step(self.g, &mut self.particles, h);
        }
        self.t = t_target;
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;

    fn two_body_circular() -> Simulation {
        let mut sim = Simulation::new();
        sim.add(1.0);
        sim.add_orbit(None, OrbitSpec::from_sma(0.0, 1.0)).unwrap();
        sim
    }

    #[test]
    fn circular_orbit_closes_after_one_period() {
        let mut sim = two_body_circular();
        sim.integrate(TAU);
        let p = sim.particle(1).unwrap();
        assert!((p.pos[0] - 1.0).abs() < 1e-3);
        assert!(p.pos[1].abs() < 5e-3);
    }

    #[test]
    fn circular_orbit_is_on_far_side_at_half_period() {
        let mut sim = two_body_circular();
        sim.integrate(TAU / 2.0);
        let p = sim.particle(1).unwrap();
        assert!((p.pos[0] + 1.0).abs() < 5e-3);
    }

    #[test]
    fn orbit_readout_returns_the_registered_elements() {
        let mut sim = Simulation::new();
        sim.add(1.0);
        let spec = OrbitSpec {
            e: 0.3,
            inc: 0.2,
            omega: 1.0,
            big_omega: 2.0,
            ..OrbitSpec::from_sma(1e-4, 1.5)
        };
        let idx = sim.add_orbit(None, spec).unwrap();
        let el = sim.orbit_of(idx, Primary::Jacobi).unwrap();
        assert!((el.semi_major_axis - 1.5).abs() < 1e-10);
        assert!((el.eccentricity - 0.3).abs() < 1e-10);
        assert!((el.inclination - 0.2).abs() < 1e-10);
        assert!((el.arg_periapsis - 1.0).abs() < 1e-10);
        assert!((el.ascending_node - 2.0).abs() < 1e-10);
    }

    #[test]
    fn period_sized_orbit_matches_keplers_third_law() {
        let mut sim = Simulation::new();
        sim.add(1.0);
        let idx = sim
            .add_orbit(None, OrbitSpec::from_period(0.0, TAU))
            .unwrap();
        let el = sim.orbit_of(idx, Primary::Jacobi).unwrap();
        assert!((el.semi_major_axis - 1.0).abs() < 1e-10);
    }

    #[test]
    fn satellite_orbits_its_declared_primary() {
        let mut sim = Simulation::new();
        sim.add(1.0);
        let planet = sim
            .add_orbit(None, OrbitSpec::from_sma(1e-3, 1.0))
            .unwrap();
        let moon = sim
            .add_orbit(Some(planet), OrbitSpec::from_sma(0.0, 0.01))
            .unwrap();
        let el = sim.orbit_of(moon, Primary::Body(planet)).unwrap();
        assert!((el.semi_major_axis - 0.01).abs() < 1e-10);
        // Referencing the star instead gives a very different answer.
        let about_star = sim.orbit_of(moon, Primary::Body(0)).unwrap();
        assert!((about_star.semi_major_axis - 0.01).abs() > 1e-3);
    }

    #[test]
    fn move_to_com_zeroes_the_weighted_sums() {
        let mut sim = two_body_circular();
        sim.particles[1].m = 0.5;
        sim.move_to_com().unwrap();
        let px: f64 = sim.particles().iter().map(|p| p.m * p.pos[0]).sum();
        let vy: f64 = sim.particles().iter().map(|p| p.m * p.vel[1]).sum();
        assert!(px.abs() < 1e-15);
        assert!(vy.abs() < 1e-15);
    }

    #[test]
    fn integrating_into_the_past_is_a_noop() {
        let mut sim = two_body_circular();
        sim.integrate(0.5);
        let before = *sim.particle(1).unwrap();
        sim.integrate(0.25);
        assert_eq!(before, *sim.particle(1).unwrap());
        assert!((sim.time() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn readout_for_the_central_body_has_no_primary() {
        let mut sim = Simulation::new();
        sim.add(1.0);
        assert!(matches!(
            sim.orbit_of(0, Primary::Jacobi),
            Err(SimulationError::NoPrimary)
        ));
    }

    #[test]
    fn rejects_nonpositive_timesteps() {
        let mut sim = Simulation::new();
        assert!(sim.set_timestep(0.0).is_err());
        assert!(sim.set_timestep(-1.0).is_err());
        assert!(sim.set_timestep(1e-4).is_ok());
    }
}
