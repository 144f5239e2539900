//! Literal body catalogs for the two study systems.
//!
//! Registration order is the body's identity: index 0 is the central
//! (star-like) body, and bodies carrying a `satellite_of` index orbit that
//! particle instead of the system barycenter. Parameters are quoted in the
//! mixed units of the source catalogs (Earth masses, kilograms, kilometres,
//! days, degrees) and converted inline into each simulation's unit system.

use planets_core::constants::G_YR_AU_MSUN;
use planets_core::time::days_to_years;
use planets_core::units::{deg_to_rad, kg_to_msun, km_to_au, mearth_to_msun};
use planets_nbody::{OrbitSpec, Simulation, SimulationError};

/// Static metadata for one registered body.
#[derive(Debug, Clone, Copy)]
pub struct BodyInfo {
    pub name: &'static str,
    /// Index of the declared orbital primary, for satellites only.
    pub satellite_of: Option<usize>,
}

/// An owned simulation plus the per-body metadata the sampling loop needs.
#[derive(Debug, Clone)]
pub struct PlanetarySystem {
    pub name: &'static str,
    pub sim: Simulation,
    /// Aligned with particle indices; entry 0 is the central body.
    pub bodies: Vec<BodyInfo>,
}

impl PlanetarySystem {
    /// Names of the sampled bodies (everything but index 0), in index order.
    pub fn sampled_names(&self) -> Vec<String> {
        self.bodies[1..].iter().map(|b| b.name.to_string()).collect()
    }
}

/// The Kepler-47 circumbinary system: two stars, three planets orbiting the
/// pair's barycenter, and a hypothetical moon of Kepler-47c registered by
/// orbital period.
///
/// Runs in the engine's default G = 1 units, so the quoted periods and times
/// are code units rather than calendar years.
pub fn kepler47() -> Result<PlanetarySystem, SimulationError> {
    let mut sim = Simulation::new();
    sim.set_timestep(5e-4)?;

    sim.add(0.957);
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.0288,
            inc: deg_to_rad(90.0 - 89.613),
            omega: deg_to_rad(226.3),
            ..OrbitSpec::from_sma(0.342, 0.08145)
        },
    )?;
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.021,
            inc: deg_to_rad(90.0 - 89.752),
            omega: deg_to_rad(48.6),
            ..OrbitSpec::from_sma(mearth_to_msun(2.07), 0.2877)
        },
    )?;
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.041,
            inc: deg_to_rad(90.0 - 90.395),
            omega: deg_to_rad(352.0),
            ..OrbitSpec::from_sma(mearth_to_msun(19.02), 0.6992)
        },
    )?;
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.044,
            inc: deg_to_rad(90.0 - 90.1925),
            omega: deg_to_rad(306.0),
            ..OrbitSpec::from_sma(mearth_to_msun(3.17), 0.9638)
        },
    )?;
    // Massless moon of Kepler-47c, sized by its 5.877-day period.
    sim.add_orbit(
        Some(4),
        OrbitSpec {
            e: 0.01,
            inc: deg_to_rad(4.0),
            omega: 4.77,
            big_omega: 0.83,
            ..OrbitSpec::from_period(0.0, days_to_years(5.877))
        },
    )?;
    sim.move_to_com()?;

    Ok(PlanetarySystem {
        name: "kepler47",
        sim,
        bodies: vec![
            BodyInfo {
                name: "Kepler-47 A",
                satellite_of: None,
            },
            BodyInfo {
                name: "Kepler-47 B",
                satellite_of: None,
            },
            BodyInfo {
                name: "Kepler-47 b",
                satellite_of: None,
            },
            BodyInfo {
                name: "Kepler-47 d",
                satellite_of: None,
            },
            BodyInfo {
                name: "Kepler-47 c",
                satellite_of: None,
            },
            BodyInfo {
                name: "Kepler-47 c I",
                satellite_of: Some(4),
            },
        ],
    })
}

/// The fictional Morana system: a star, four planets, and three moons of the
/// innermost planet whose masses are quoted in kilograms and semi-major axes
/// in kilometres.
///
/// Declares (yr, AU, Msun) units, so G = 4π² and all conversions land in
/// that system.
pub fn morana() -> Result<PlanetarySystem, SimulationError> {
    let mut sim = Simulation::new();
    sim.set_g(G_YR_AU_MSUN);
    sim.set_timestep(2.5e-4)?;

    sim.add(0.867);
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.5,
            omega: 6.01,
            ..OrbitSpec::from_sma(mearth_to_msun(1.0), 0.7)
        },
    )?;
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.1,
            omega: 2.85,
            inc: deg_to_rad(6.5),
            big_omega: 4.05,
            ..OrbitSpec::from_sma(mearth_to_msun(5.0), 2.1)
        },
    )?;
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.3,
            omega: 5.86,
            inc: deg_to_rad(21.0),
            big_omega: 5.72,
            ..OrbitSpec::from_sma(mearth_to_msun(93.0), 6.3)
        },
    )?;
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.12,
            omega: 5.37,
            inc: deg_to_rad(-12.0),
            big_omega: 2.14,
            ..OrbitSpec::from_sma(mearth_to_msun(0.6), 0.51)
        },
    )?;
    sim.add_orbit(
        Some(1),
        OrbitSpec {
            e: 0.09,
            omega: 2.35,
            inc: deg_to_rad(5.2),
            big_omega: 4.87,
            ..OrbitSpec::from_sma(kg_to_msun(2.1e17), km_to_au(67_000.0))
        },
    )?;
    sim.add_orbit(
        Some(1),
        OrbitSpec {
            e: 0.23,
            omega: 3.78,
            inc: deg_to_rad(-17.0),
            big_omega: 3.98,
            ..OrbitSpec::from_sma(kg_to_msun(4.7e15), km_to_au(150_000.0))
        },
    )?;
    sim.add_orbit(
        Some(1),
        OrbitSpec {
            e: 0.04,
            omega: 5.10,
            inc: deg_to_rad(1.4),
            big_omega: 0.77,
            ..OrbitSpec::from_sma(kg_to_msun(6.1e20), km_to_au(232_000.0))
        },
    )?;
    sim.move_to_com()?;

    Ok(PlanetarySystem {
        name: "morana",
        sim,
        bodies: vec![
            BodyInfo {
                name: "Morana",
                satellite_of: None,
            },
            BodyInfo {
                name: "Morana b",
                satellite_of: None,
            },
            BodyInfo {
                name: "Morana c",
                satellite_of: None,
            },
            BodyInfo {
                name: "Morana d",
                satellite_of: None,
            },
            BodyInfo {
                name: "Morana e",
                satellite_of: None,
            },
            BodyInfo {
                name: "Morana b I",
                satellite_of: Some(1),
            },
            BodyInfo {
                name: "Morana b II",
                satellite_of: Some(1),
            },
            BodyInfo {
                name: "Morana b III",
                satellite_of: Some(1),
            },
        ],
    })
}
