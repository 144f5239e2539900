//! Hypothetical planetary systems, sampled over time.
//!
//! The library owns three things: the literal body catalogs of the two
//! study systems (Kepler-47 and the fictional Morana system), the pre-step
//! sampling loop that tabulates semi-major axes and distances from the
//! primary over a fixed time grid, and the chart rendering. The
//! gravitational mechanics live in `planets_nbody`; keeping the bookkeeping
//! in a library crate lets the binaries and the tests share it.

pub mod plot;
pub mod sampling;
pub mod systems;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
