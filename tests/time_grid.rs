use simulated_planets::sampling::time_grid;

#[test]
fn kepler47_grid_has_exactly_1000_points() {
    let times = time_grid(0.0, 12.0 / 365.0, 1000);
    assert_eq!(times.len(), 1000);
    assert_eq!(times[0], 0.0);
    assert!((times[999] - 12.0 / 365.0).abs() < 1e-15);
}

#[test]
fn morana_grid_has_exactly_50_points() {
    let times = time_grid(0.0, 1000.0, 50);
    assert_eq!(times.len(), 50);
    assert_eq!(times[0], 0.0);
    assert!((times[49] - 1000.0).abs() < 1e-9);
}

#[test]
fn grids_are_strictly_increasing() {
    for times in [
        time_grid(0.0, 12.0 / 365.0, 1000),
        time_grid(0.0, 1000.0, 50),
    ] {
        assert!(times.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn grid_spacing_is_even() {
    let times = time_grid(0.0, 1.0, 5);
    let steps: Vec<f64> = times.windows(2).map(|w| w[1] - w[0]).collect();
    for s in &steps {
        assert!((s - 0.25).abs() < 1e-15);
    }
}

#[test]
fn degenerate_lengths_are_handled() {
    assert!(time_grid(0.0, 1.0, 0).is_empty());
    assert_eq!(time_grid(3.0, 9.0, 1), vec![3.0]);
}
