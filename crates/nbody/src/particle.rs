//! Point-mass particle state.

use planets_core::vector::{self, Vector3};

/// A point mass with Cartesian position and velocity in simulation units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub m: f64,
    pub pos: Vector3,
    pub vel: Vector3,
}

impl Particle {
    /// A particle at rest at the origin.
    pub fn at_rest(m: f64) -> Self {
        Self {
            m,
            pos: [0.0; 3],
            vel: [0.0; 3],
        }
    }

    /// Euclidean distance to another particle.
    pub fn distance_to(&self, other: &Particle) -> f64 {
        vector::norm(&vector::sub(&self.pos, &other.pos))
    }

    /// Mass-weighted composite of a set of particles.
    ///
    /// Returns `None` when the set is empty or carries no mass; a massless
    /// composite has no meaningful barycenter.
    pub fn composite(particles: &[Particle]) -> Option<Particle> {
        let total_mass: f64 = particles.iter().map(|p| p.m).sum();
        if particles.is_empty() || total_mass <= 0.0 {
            return None;
        }
        let mut pos = [0.0; 3];
        let mut vel = [0.0; 3];
        for p in particles {
            pos = vector::add(&pos, &vector::scale(&p.pos, p.m));
            vel = vector::add(&vel, &vector::scale(&p.vel, p.m));
        }
        Some(Particle {
            m: total_mass,
            pos: vector::scale(&pos, 1.0 / total_mass),
            vel: vector::scale(&vel, 1.0 / total_mass),
        })
    }
}
