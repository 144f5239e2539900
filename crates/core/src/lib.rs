//! Core units, constants, and shared primitives for the simulated-planets workspace.

/// Physical constants. Masses in kilograms, lengths in kilometres unless stated.
pub mod constants {
    use std::f64::consts::PI;

    /// Gravitational constant in (AU, yr, Msun) units, from Kepler's third law.
    pub const G_YR_AU_MSUN: f64 = 4.0 * PI * PI;
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Earth mass (kg), IAU nominal.
    pub const EARTH_MASS_KG: f64 = 5.972_17e24;
    /// Solar mass (kg), IAU nominal.
    pub const SOLAR_MASS_KG: f64 = 1.988_41e30;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{AU_KM, EARTH_MASS_KG, SOLAR_MASS_KG};

    /// Convert Earth masses to solar masses.
    #[inline]
    pub fn mearth_to_msun(v: f64) -> f64 {
        v * EARTH_MASS_KG / SOLAR_MASS_KG
    }

    /// Convert kilograms to solar masses.
    #[inline]
    pub fn kg_to_msun(v: f64) -> f64 {
        v / SOLAR_MASS_KG
    }

    /// Convert kilometres to astronomical units.
    #[inline]
    pub fn km_to_au(v: f64) -> f64 {
        v / AU_KM
    }

    /// Convert astronomical units to kilometres.
    #[inline]
    pub fn au_to_km(v: f64) -> f64 {
        v * AU_KM
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::DAYS_PER_YEAR;

    /// Convert days to Julian years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }

    /// Convert Julian years to days.
    #[inline]
    pub fn years_to_days(years: f64) -> f64 {
        years * DAYS_PER_YEAR
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector; units depend on the simulation's unit system.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Cross product of two vectors.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }
}
