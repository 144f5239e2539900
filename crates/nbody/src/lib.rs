//! Gravitational N-body engine for the simulated-planets workspace.
//!
//! Bodies are set up from classical orbital elements relative to an arbitrary
//! primary, advanced with a fixed-step velocity-Verlet integrator, and read
//! back out as elements relative to either the Jacobi composite of all
//! lower-index particles or an explicitly chosen particle.

pub mod elements;
mod integrator;
pub mod particle;
pub mod simulation;

pub use elements::{OrbitalElements, period_to_sma, sma_to_period, solve_kepler};
pub use particle::Particle;
pub use simulation::{OrbitSize, OrbitSpec, Primary, Simulation};

use thiserror::Error;

/// Errors surfaced by the simulation API.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("particle index {0} out of range")]
    IndexOutOfRange(usize),
    #[error("no particles available to act as primary")]
    NoPrimary,
    #[error("primary has zero total mass")]
    MasslessPrimary,
    #[error("particle {0} cannot be its own primary")]
    SelfPrimary(usize),
    #[error("simulation holds no particles")]
    Empty,
    #[error("time step must be positive, got {0}")]
    NonPositiveTimestep(f64),
}
