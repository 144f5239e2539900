use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn kepler47_help_names_the_system() {
    Command::cargo_bin("kepler47")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kepler-47"));
}

#[test]
fn morana_help_names_the_system() {
    Command::cargo_bin("morana")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morana"));
}

#[test]
fn kepler47_short_run_writes_charts_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("kepler47")
        .unwrap()
        .args(["--steps", "4", "--horizon-days", "0.5", "--csv", "--json"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("integrating time step 4/4"))
        .stdout(predicate::str::contains("simulation time"));

    for file in [
        "orbits_planets.png",
        "orbits_moon.png",
        "positions.png",
        "semi_major_axes.png",
        "distances.png",
        "semi_major_axes.csv",
        "distances.csv",
        "run.json",
    ] {
        assert!(dir.path().join(file).is_file(), "missing {file}");
    }

    let csv = std::fs::read_to_string(dir.path().join("semi_major_axes.csv")).unwrap();
    assert!(csv.starts_with("time,"));
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("Kepler-47 c I"));
}

#[test]
fn morana_short_run_writes_charts() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("morana")
        .unwrap()
        .args(["--steps", "3", "--horizon-years", "0.01"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("integrating time step 3/3"));

    for file in [
        "orbits.png",
        "orbits_planets.png",
        "orbits_moons.png",
        "semi_major_axes.png",
        "distances.png",
    ] {
        assert!(dir.path().join(file).is_file(), "missing {file}");
    }
    assert!(!dir.path().join("run.json").exists());
}
