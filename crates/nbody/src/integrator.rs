//! Fixed-step velocity-Verlet integration with direct-summation gravity.

use planets_core::vector::{self, Vector3};

use crate::particle::Particle;

/// Advance the system by one step of size `dt` using velocity-Verlet.
///
/// Two force evaluations per step: kick with a(t), drift, kick with a(t+dt).
pub(crate) fn verlet_step(g: f64, particles: &mut [Particle], dt: f64) {
    let n = particles.len();
    if n == 0 {
        return;
    }
    let half_dt = 0.5 * dt;

    let mut acc = vec![[0.0; 3]; n];
    accumulate_accels(g, particles, &mut acc);

    // v(t + dt/2) = v(t) + (dt/2) a(t)
    for (p, a) in particles.iter_mut().zip(acc.iter()) {
        p.vel = vector::add(&p.vel, &vector::scale(a, half_dt));
    }
    // x(t + dt) = x(t) + dt v(t + dt/2)
    for p in particles.iter_mut() {
        p.pos = vector::add(&p.pos, &vector::scale(&p.vel, dt));
    }

    let mut acc_new = vec![[0.0; 3]; n];
    accumulate_accels(g, particles, &mut acc_new);

    // v(t + dt) = v(t + dt/2) + (dt/2) a(t + dt)
    for (p, a) in particles.iter_mut().zip(acc_new.iter()) {
        p.vel = vector::add(&p.vel, &vector::scale(a, half_dt));
    }
}

/// Accumulate pairwise gravitational accelerations into `out`.
///
/// Direct O(n²) summation over unordered pairs, no softening. Massless
/// particles feel gravity but exert none.
fn accumulate_accels(g: f64, particles: &[Particle], out: &mut [Vector3]) {
    for a in out.iter_mut() {
        *a = [0.0; 3];
    }
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let sep = vector::sub(&particles[j].pos, &particles[i].pos);
            let dist2 = vector::dot(&sep, &sep);
            let inv_dist3 = 1.0 / (dist2 * dist2.sqrt());
            out[i] = vector::add(&out[i], &vector::scale(&sep, g * particles[j].m * inv_dist3));
            out[j] = vector::sub(&out[j], &vector::scale(&sep, g * particles[i].m * inv_dist3));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accelerations_obey_newtons_third_law() {
        let particles = [
            Particle {
                m: 2.0,
                pos: [0.0, 0.0, 0.0],
                vel: [0.0; 3],
            },
            Particle {
                m: 1.0,
                pos: [1.0, 0.0, 0.0],
                vel: [0.0; 3],
            },
        ];
        let mut acc = [[0.0; 3]; 2];
        accumulate_accels(1.0, &particles, &mut acc);
        // Forces are equal and opposite, so m0 a0 = -m1 a1.
        assert!((2.0 * acc[0][0] + acc[1][0]).abs() < 1e-15);
        assert!((acc[0][0] - 1.0).abs() < 1e-15);
        assert!((acc[1][0] + 2.0).abs() < 1e-15);
    }

    #[test]
    fn verlet_conserves_momentum() {
        let mut particles = vec![
            Particle {
                m: 1.0,
                pos: [0.0, 0.0, 0.0],
                vel: [0.0, -0.5, 0.0],
            },
            Particle {
                m: 1.0,
                pos: [1.0, 0.0, 0.0],
                vel: [0.0, 0.5, 0.0],
            },
        ];
        for _ in 0..100 {
            verlet_step(1.0, &mut particles, 1e-3);
        }
        let px: f64 = particles.iter().map(|p| p.m * p.vel[0]).sum();
        let py: f64 = particles.iter().map(|p| p.m * p.vel[1]).sum();
        assert!(px.abs() < 1e-12);
        assert!(py.abs() < 1e-12);
    }
}
