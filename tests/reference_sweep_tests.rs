use sedi::{
    params::SimParams,
    problem::{simulate, Problem},
    settings,
};

// Tolerance for comparing normalised intensities
const TOL: f32 = 1e-2;

fn reference_params() -> SimParams {
    SimParams {
        wavelength: 32.0,
        horn_aperture: 140.0,
        dist_l1: 600.0,
        dist_l2: 600.0,
        slit_width: 40.0,
        screen_width: 300.0,
        enable_edges: true,
    }
}

fn reference_angles() -> Vec<f32> {
    (-60..=60).map(|deg| deg as f32).collect()
}

#[test]
fn output_length_matches_input() {
    let params = reference_params();
    let angles = reference_angles();

    let points = simulate(&params, &angles);
    assert_eq!(points.len(), angles.len());
    for (point, angle) in points.iter().zip(&angles) {
        assert_eq!(point.theta, *angle);
    }

    assert!(simulate(&params, &[]).is_empty());
}

#[test]
fn sweep_peak_is_100() {
    let points = simulate(&reference_params(), &reference_angles());
    let peak = points
        .iter()
        .map(|p| p.intensity)
        .fold(f32::NEG_INFINITY, f32::max);
    assert!((peak - 100.0).abs() < TOL, "peak: {}", peak);
    assert!(points.iter().all(|p| p.intensity >= 0.0));
}

#[test]
fn pattern_is_symmetric() {
    let points = simulate(&reference_params(), &reference_angles());
    let n = points.len();
    for i in 0..n / 2 {
        let pos = points[n - 1 - i];
        let neg = points[i];
        assert!(
            (pos.intensity - neg.intensity).abs() < TOL,
            "theta: {}, pos: {}, neg: {}",
            pos.theta,
            pos.intensity,
            neg.intensity
        );
    }
}

#[test]
fn edge_toggle_shifts_the_axial_intensity() {
    let with_edges = reference_params();
    let without_edges = SimParams {
        enable_edges: false,
        ..with_edges
    };
    let angles = reference_angles();

    let on = simulate(&with_edges, &angles);
    let off = simulate(&without_edges, &angles);

    let axial_on = on.iter().find(|p| p.theta == 0.0).unwrap().intensity;
    let axial_off = off.iter().find(|p| p.theta == 0.0).unwrap().intensity;
    assert_ne!(axial_on, axial_off);
}

// The documented anomaly for the 40 mm slit in a 300 mm screen: coherent
// edge waves arrive roughly in antiphase on the axis and carve a dip into
// the central maximum.
#[test]
fn forty_mm_dip_on_the_axis() {
    let with_edges = reference_params();
    let without_edges = SimParams {
        enable_edges: false,
        ..with_edges
    };
    let angles = reference_angles();

    let on = simulate(&with_edges, &angles);
    let off = simulate(&without_edges, &angles);

    let axial_on = on.iter().find(|p| p.theta == 0.0).unwrap().intensity;
    let axial_off = off.iter().find(|p| p.theta == 0.0).unwrap().intensity;

    // Without edge diffraction the axis is the peak of the pattern.
    assert!((axial_off - 100.0).abs() < TOL, "axial_off: {}", axial_off);
    // With it, the axial value drops measurably below the sweep peak.
    assert!(
        axial_on < axial_off - 1.0,
        "axial_on: {}, axial_off: {}",
        axial_on,
        axial_off
    );
}

#[test]
fn repeated_runs_are_bit_identical() {
    let params = reference_params();
    let angles = reference_angles();

    let first = simulate(&params, &angles);
    let second = simulate(&params, &angles);

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.theta.to_bits(), b.theta.to_bits());
        assert_eq!(a.intensity.to_bits(), b.intensity.to_bits());
    }
}

#[test]
fn default_config_drives_the_reference_sweep() {
    let settings = settings::load_default_config().unwrap();
    assert_eq!(settings.params, reference_params());

    let mut problem = Problem::new(Some(settings));
    assert_eq!(problem.angles.len(), 121);

    problem.solve();
    assert_eq!(problem.result.points.len(), 121);
}
