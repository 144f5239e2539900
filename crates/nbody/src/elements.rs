//! Classical orbital elements and their conversion to and from state vectors.

use std::f64::consts::TAU;

use planets_core::vector::{self, Vector3};

/// Angles below this eccentricity or node length are treated as degenerate.
const DEGENERACY_EPS: f64 = 1e-12;

/// Classical Keplerian orbital elements, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    /// Longitude of the ascending node (Ω).
    pub ascending_node: f64,
    /// Argument of periapsis (ω).
    pub arg_periapsis: f64,
    pub true_anomaly: f64,
}

impl OrbitalElements {
    /// A circular, planar orbit of the given size, at periapsis.
    pub fn circular(semi_major_axis: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity: 0.0,
            inclination: 0.0,
            ascending_node: 0.0,
            arg_periapsis: 0.0,
            true_anomaly: 0.0,
        }
    }
}

/// Semi-major axis from orbital period via Kepler's third law.
#[inline]
pub fn period_to_sma(period: f64, mu: f64) -> f64 {
    (mu * period * period / (TAU * TAU)).cbrt()
}

/// Orbital period from semi-major axis via Kepler's third law.
#[inline]
pub fn sma_to_period(sma: f64, mu: f64) -> f64 {
    TAU * (sma.powi(3) / mu).sqrt()
}

/// Solve Kepler's equation M = E - e sin E for the eccentric anomaly.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ea = if eccentricity < 0.8 {
        mean_anomaly
    } else {
        std::f64::consts::PI
    };
    for _ in 0..30 {
        let delta =
            (ea - eccentricity * ea.sin() - mean_anomaly) / (1.0 - eccentricity * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ea
}

/// True anomaly from eccentric anomaly.
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * half.sin(),
        (1.0 - eccentricity).sqrt() * half.cos(),
    )
}

/// Relative position and velocity from orbital elements.
///
/// `mu` is G times the combined mass of the body and its primary. Hyperbolic
/// or otherwise malformed inputs are passed through and may yield NaNs; the
/// caller gets exactly the degenerate orbit it asked for.
pub fn state_from_elements(el: &OrbitalElements, mu: f64) -> (Vector3, Vector3) {
    let p = el.semi_major_axis * (1.0 - el.eccentricity * el.eccentricity);
    let (sin_f, cos_f) = el.true_anomaly.sin_cos();
    let r = p / (1.0 + el.eccentricity * cos_f);

    // Perifocal frame: x toward periapsis, z along the orbit normal.
    let pos_pf = [r * cos_f, r * sin_f, 0.0];
    let v_scale = (mu / p).sqrt();
    let vel_pf = [-v_scale * sin_f, v_scale * (el.eccentricity + cos_f), 0.0];

    (
        rotate_to_inertial(&pos_pf, el),
        rotate_to_inertial(&vel_pf, el),
    )
}

/// Orbital elements from a relative state vector.
pub fn elements_from_state(pos: &Vector3, vel: &Vector3, mu: f64) -> OrbitalElements {
    let r = vector::norm(pos);
    let v2 = vector::dot(vel, vel);
    let rv = vector::dot(pos, vel);

    let h = vector::cross(pos, vel);
    let h_norm = vector::norm(&h);

    let semi_major_axis = 1.0 / (2.0 / r - v2 / mu);

    let e_vec = vector::sub(
        &vector::scale(pos, v2 / mu - 1.0 / r),
        &vector::scale(vel, rv / mu),
    );
    let eccentricity = vector::norm(&e_vec);

    let inclination = (h[2] / h_norm).clamp(-1.0, 1.0).acos();

    // Node vector n = z × h lies along the ascending node.
    let n = [-h[1], h[0], 0.0];
    let n_norm = vector::norm(&n);

    let ascending_node = if n_norm > DEGENERACY_EPS {
        wrap_if(f64::atan2(n[1], n[0]), false)
    } else {
        0.0
    };

    let arg_periapsis = if eccentricity > DEGENERACY_EPS && n_norm > DEGENERACY_EPS {
        let cos_w = (vector::dot(&n, &e_vec) / (n_norm * eccentricity)).clamp(-1.0, 1.0);
        wrap_if(cos_w.acos(), e_vec[2] < 0.0)
    } else if eccentricity > DEGENERACY_EPS {
        // Equatorial orbit: measure periapsis from the x axis.
        wrap_if(
            (e_vec[0] / eccentricity).clamp(-1.0, 1.0).acos(),
            e_vec[1] < 0.0,
        )
    } else {
        0.0
    };

    let true_anomaly = if eccentricity > DEGENERACY_EPS {
        let cos_f = (vector::dot(&e_vec, pos) / (eccentricity * r)).clamp(-1.0, 1.0);
        wrap_if(cos_f.acos(), rv < 0.0)
    } else if n_norm > DEGENERACY_EPS {
        // Circular inclined orbit: angle from the ascending node.
        let cos_u = (vector::dot(&n, pos) / (n_norm * r)).clamp(-1.0, 1.0);
        wrap_if(cos_u.acos(), pos[2] < 0.0)
    } else {
        // Circular equatorial orbit: angle from the x axis.
        wrap_if((pos[0] / r).clamp(-1.0, 1.0).acos(), pos[1] < 0.0)
    };

    OrbitalElements {
        semi_major_axis,
        eccentricity,
        inclination,
        ascending_node,
        arg_periapsis,
        true_anomaly,
    }
}

/// Rotate a perifocal-frame vector into the inertial frame (Rz(Ω) Rx(i) Rz(ω)).
fn rotate_to_inertial(v: &Vector3, el: &OrbitalElements) -> Vector3 {
    let (sin_w, cos_w) = el.arg_periapsis.sin_cos();
    let (sin_i, cos_i) = el.inclination.sin_cos();
    let (sin_o, cos_o) = el.ascending_node.sin_cos();

    // Rz(ω)
    let x1 = cos_w * v[0] - sin_w * v[1];
    let y1 = sin_w * v[0] + cos_w * v[1];
    let z1 = v[2];
    // Rx(i)
    let x2 = x1;
    let y2 = cos_i * y1 - sin_i * z1;
    let z2 = sin_i * y1 + cos_i * z1;
    // Rz(Ω)
    [
        cos_o * x2 - sin_o * y2,
        sin_o * x2 + cos_o * y2,
        z2,
    ]
}

/// Wrap an angle in [0, π] to [0, 2π) when the discriminating sign says so.
fn wrap_if(angle: f64, flip: bool) -> f64 {
    let wrapped = if flip { TAU - angle } else { angle };
    wrapped.rem_euclid(TAU)
}
