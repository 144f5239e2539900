use planets_core::vector;
use planets_nbody::{OrbitSpec, Primary, Simulation};
use simulated_planets::sampling::{SampleRun, run, time_grid};
use simulated_planets::systems::{self, BodyInfo, PlanetarySystem};

/// Star, one planet, and a moon declared a satellite of the planet.
fn toy_system() -> PlanetarySystem {
    let mut sim = Simulation::new();
    sim.add(1.0);
    sim.add_orbit(
        None,
        OrbitSpec {
            e: 0.1,
            ..OrbitSpec::from_sma(1e-3, 1.0)
        },
    )
    .unwrap();
    sim.add_orbit(Some(1), OrbitSpec::from_sma(0.0, 0.01)).unwrap();
    sim.move_to_com().unwrap();
    PlanetarySystem {
        name: "toy",
        sim,
        bodies: vec![
            BodyInfo {
                name: "star",
                satellite_of: None,
            },
            BodyInfo {
                name: "planet",
                satellite_of: None,
            },
            BodyInfo {
                name: "moon",
                satellite_of: Some(1),
            },
        ],
    }
}

#[test]
fn first_column_reflects_the_prestep_state() {
    let mut system = toy_system();
    let snapshot = system.clone();
    let out = run(&mut system, &[0.0, 0.1], |_, _| {}).unwrap();

    let expected_sma = snapshot
        .sim
        .orbit_of(1, Primary::Jacobi)
        .unwrap()
        .semi_major_axis;
    assert_eq!(out.semi_major_axes[0][0], expected_sma);

    let star = snapshot.sim.particle(0).unwrap().pos;
    let planet = snapshot.sim.particle(1).unwrap().pos;
    assert_eq!(
        out.distances[0][0],
        vector::norm(&vector::sub(&planet, &star))
    );
}

#[test]
fn satellites_are_read_out_against_their_declared_primary() {
    let mut system = toy_system();
    let snapshot = system.clone();
    let out = run(&mut system, &[0.0], |_, _| {}).unwrap();

    let about_planet = snapshot
        .sim
        .orbit_of(2, Primary::Body(1))
        .unwrap()
        .semi_major_axis;
    let about_jacobi = snapshot
        .sim
        .orbit_of(2, Primary::Jacobi)
        .unwrap()
        .semi_major_axis;
    assert_eq!(out.semi_major_axes[1][0], about_planet);
    assert!((out.semi_major_axes[1][0] - about_jacobi).abs() > 1e-6);
}

#[test]
fn distances_are_taken_from_the_primary_even_for_satellites() {
    let mut system = toy_system();
    let snapshot = system.clone();
    let out = run(&mut system, &[0.0], |_, _| {}).unwrap();

    let star = snapshot.sim.particle(0).unwrap().pos;
    let moon = snapshot.sim.particle(2).unwrap().pos;
    assert_eq!(
        out.distances[1][0],
        vector::norm(&vector::sub(&moon, &star))
    );
}

#[test]
fn tables_have_one_row_per_sampled_body_and_no_gaps() {
    let mut system = toy_system();
    let times = time_grid(0.0, 0.5, 7);
    let out = run(&mut system, &times, |_, _| {}).unwrap();
    assert_eq!(out.semi_major_axes.len(), 2);
    assert_eq!(out.distances.len(), 2);
    assert_eq!(out.positions.len(), 7);
    for row in out.semi_major_axes.iter().chain(out.distances.iter()) {
        assert_eq!(row.len(), 7);
        assert!(row.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn progress_reports_every_step_before_it_commits() {
    let mut system = toy_system();
    let times = time_grid(0.0, 0.3, 4);
    let mut seen = Vec::new();
    run(&mut system, &times, |i, t| seen.push((i, t))).unwrap();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], (0, 0.0));
    assert_eq!(seen[3].0, 3);
}

fn assert_bitwise_equal(a: &SampleRun, b: &SampleRun) {
    for (ra, rb) in a.semi_major_axes.iter().zip(&b.semi_major_axes) {
        for (x, y) in ra.iter().zip(rb) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
    for (ra, rb) in a.distances.iter().zip(&b.distances) {
        for (x, y) in ra.iter().zip(rb) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}

#[test]
fn identical_inputs_reproduce_identical_tables() {
    let times = time_grid(0.0, 12.0 / 365.0, 100);
    let mut first = systems::kepler47().unwrap();
    let mut second = systems::kepler47().unwrap();
    let run_a = run(&mut first, &times, |_, _| {}).unwrap();
    let run_b = run(&mut second, &times, |_, _| {}).unwrap();
    assert_bitwise_equal(&run_a, &run_b);
}
