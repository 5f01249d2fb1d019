use sedi::params::SimParams;
use sedi::problem::simulate;

fn main() {
    let params = SimParams {
        wavelength: 32.0,
        horn_aperture: 140.0,
        dist_l1: 600.0,
        dist_l2: 600.0,
        slit_width: 40.0,
        screen_width: 300.0,
        enable_edges: true,
    };

    let angles: Vec<f32> = (-60..=60).map(|deg| deg as f32).collect();
    let points = simulate(&params, &angles);

    for point in points {
        println!("{:>6.1} {:>8.3}", point.theta, point.intensity);
    }
}
