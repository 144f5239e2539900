use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use planets_export::{SeriesTable, write_run_json, write_series_csv, writer_for_path};
use simulated_planets::{plot, sampling, systems};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Simulate the fictional Morana system and chart orbital elements over time"
)]
struct Cli {
    /// Directory the PNG charts and optional exports are written to
    #[arg(long, default_value = "artifacts/morana")]
    output_dir: PathBuf,

    /// Number of time samples across the horizon
    #[arg(long, default_value_t = 50)]
    steps: usize,

    /// Simulated horizon in years
    #[arg(long, default_value_t = 1000.0)]
    horizon_years: f64,

    /// Also export the sampled tables as CSV
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Also export the run as a JSON sidecar
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut system = systems::morana()?;
    fs::create_dir_all(&cli.output_dir)?;

    // Static diagrams of the initial configuration: the whole system, the
    // planets about the barycenter, and the moons about Morana b.
    plot::orbit_diagram(
        &system,
        &[1, 2, 3, 4, 5, 6, 7],
        &cli.output_dir.join("orbits.png"),
        (900, 900),
    )?;
    plot::orbit_diagram(
        &system,
        &[1, 2, 3, 4],
        &cli.output_dir.join("orbits_planets.png"),
        (900, 900),
    )?;
    plot::orbit_diagram(
        &system,
        &[5, 6, 7],
        &cli.output_dir.join("orbits_moons.png"),
        (900, 900),
    )?;

    let times = sampling::time_grid(0.0, cli.horizon_years, cli.steps);
    let total = times.len();
    let clock = Instant::now();
    let run = sampling::run(&mut system, &times, |i, t| {
        println!("integrating time step {}/{}: {t:.3} years", i + 1, total);
    })?;
    println!("simulation time: {:.3} seconds", clock.elapsed().as_secs_f64());

    plot::series_chart(
        &run.times,
        &run.semi_major_axes,
        &cli.output_dir.join("semi_major_axes.png"),
        (1200, 700),
    )?;
    plot::series_chart(
        &run.times,
        &run.distances,
        &cli.output_dir.join("distances.png"),
        (1200, 700),
    )?;

    let names = system.sampled_names();
    if cli.csv {
        let mut out = writer_for_path(&cli.output_dir.join("semi_major_axes.csv"))?;
        write_series_csv(
            &SeriesTable {
                times: &run.times,
                body_names: &names,
                rows: &run.semi_major_axes,
            },
            &mut out,
        )?;
        let mut out = writer_for_path(&cli.output_dir.join("distances.csv"))?;
        write_series_csv(
            &SeriesTable {
                times: &run.times,
                body_names: &names,
                rows: &run.distances,
            },
            &mut out,
        )?;
    }
    if cli.json {
        write_run_json(
            &cli.output_dir.join("run.json"),
            system.name,
            &names,
            &run.times,
            &run.semi_major_axes,
            &run.distances,
        )?;
    }

    Ok(())
}
