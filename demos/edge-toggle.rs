use sedi::params::SimParams;
use sedi::problem::simulate;

// Compare the axial intensity with and without edge diffraction for a range
// of slit widths, reproducing the anomalous dip near a 40 mm slit.
fn main() {
    let angles: Vec<f32> = (-60..=60).map(|deg| deg as f32).collect();

    println!("{:>10} {:>12} {:>12}", "slit (mm)", "axial (on)", "axial (off)");
    for slit_width in (20..=80).step_by(10) {
        let params = SimParams {
            wavelength: 32.0,
            horn_aperture: 140.0,
            dist_l1: 600.0,
            dist_l2: 600.0,
            slit_width: slit_width as f32,
            screen_width: 300.0,
            enable_edges: true,
        };

        let on = simulate(&params, &angles);
        let off = simulate(
            &SimParams {
                enable_edges: false,
                ..params
            },
            &angles,
        );

        let axial = |points: &[sedi::result::DataPoint]| {
            points
                .iter()
                .find(|p| p.theta == 0.0)
                .map(|p| p.intensity)
                .unwrap_or(f32::NAN)
        };

        println!(
            "{:>10} {:>12.3} {:>12.3}",
            slit_width,
            axial(&on),
            axial(&off)
        );
    }
}
