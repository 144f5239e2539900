//! Chart rendering for orbit diagrams, position trails, and sampled series.
//!
//! Purely presentational: everything here draws what the sampling loop
//! already computed. Charts are written as PNG files through the plotters
//! bitmap backend; body j keeps palette color j across all charts.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use planets_nbody::{OrbitalElements, Primary, SimulationError, elements::state_from_elements};

use crate::sampling::SampleRun;
use crate::systems::PlanetarySystem;

/// Points per rendered orbit ellipse.
const ELLIPSE_SAMPLES: usize = 256;

/// Errors surfaced while rendering charts.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

fn draw_err(e: impl std::fmt::Display) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Render the instantaneous orbits of the listed bodies as a static diagram.
///
/// Each body's ellipse is reconstructed from its current elements relative to
/// its declared primary (or the Jacobi composite), swept over true anomaly,
/// and drawn in the body's palette color; current positions are overlaid as
/// filled dots and the reference bodies as larger dark dots.
pub fn orbit_diagram(
    system: &PlanetarySystem,
    indices: &[usize],
    path: &Path,
    size: (u32, u32),
) -> Result<(), PlotError> {
    let sim = &system.sim;
    let mut curves: Vec<(usize, Vec<(f64, f64)>)> = Vec::with_capacity(indices.len());
    let mut markers: Vec<(f64, f64)> = Vec::new();

    for &j in indices {
        let reference = match system.bodies.get(j).and_then(|b| b.satellite_of) {
            Some(k) => Primary::Body(k),
            None => Primary::Jacobi,
        };
        let primary = sim.primary_of(j, reference)?;
        let body = sim.particle(j)?;
        let el = sim.orbit_of(j, reference)?;
        let mu = sim.g() * (primary.m + body.m);

        let points = (0..=ELLIPSE_SAMPLES)
            .map(|s| {
                let swept = OrbitalElements {
                    true_anomaly: s as f64 / ELLIPSE_SAMPLES as f64 * std::f64::consts::TAU,
                    ..el
                };
                let (pos, _) = state_from_elements(&swept, mu);
                (primary.pos[0] + pos[0], primary.pos[1] + pos[1])
            })
            .collect();
        curves.push((j, points));
        markers.push((primary.pos[0], primary.pos[1]));
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in curves.iter().flat_map(|(_, pts)| pts.iter()) {
        if x.is_finite() && y.is_finite() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        (x_min, x_max, y_min, y_max) = (-1.0, 1.0, -1.0, 1.0);
    }
    let pad = ((x_max - x_min).max(y_max - y_min) * 0.1).max(1e-12);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), (y_min - pad)..(y_max + pad))
        .map_err(draw_err)?;
    chart.configure_mesh().draw().map_err(draw_err)?;

    for (j, points) in &curves {
        let color = Palette99::pick(*j);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .map_err(draw_err)?;
        let body = sim.particle(*j)?;
        chart
            .draw_series(std::iter::once(Circle::new(
                (body.pos[0], body.pos[1]),
                4,
                color.filled(),
            )))
            .map_err(draw_err)?;
    }
    for (x, y) in markers {
        chart
            .draw_series(std::iter::once(Circle::new(
                (x, y),
                6,
                BLACK.mix(0.8).filled(),
            )))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Render the accumulated position snapshots as a scatter whose opacity
/// increases with time, one palette color per body.
pub fn trail_scatter(
    run: &SampleRun,
    path: &Path,
    lim: f64,
    size: (u32, u32),
) -> Result<(), PlotError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-lim..lim, -lim..lim)
        .map_err(draw_err)?;
    chart.configure_mesh().draw().map_err(draw_err)?;

    let steps = run.positions.len().max(1);
    for (i, snapshot) in run.positions.iter().enumerate() {
        let alpha = i as f64 / steps as f64;
        chart
            .draw_series(snapshot.iter().enumerate().map(|(j, pos)| {
                Circle::new((pos[0], pos[1]), 2, Palette99::pick(j).mix(alpha).filled())
            }))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Render one line per table row against the time grid.
///
/// Row j is drawn in palette color j + 1 so it matches the body it samples.
pub fn series_chart(
    times: &[f64],
    rows: &[Vec<f64>],
    path: &Path,
    size: (u32, u32),
) -> Result<(), PlotError> {
    let (x_min, x_max) = match (times.first(), times.last()) {
        (Some(&a), Some(&b)) if b > a => (a, b),
        (Some(&a), _) => (a, a + 1.0),
        _ => (0.0, 1.0),
    };

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for v in rows.iter().flatten().copied().filter(|v| v.is_finite()) {
        y_min = y_min.min(v);
        y_max = y_max.max(v);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    let pad = ((y_max - y_min) * 0.05).max(1e-12);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
        .map_err(draw_err)?;
    chart.configure_mesh().draw().map_err(draw_err)?;

    for (row_idx, row) in rows.iter().enumerate() {
        let color = Palette99::pick(row_idx + 1);
        chart
            .draw_series(LineSeries::new(
                times.iter().copied().zip(row.iter().copied()),
                &color,
            ))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}
