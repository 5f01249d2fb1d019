use std::time::Instant;

use crate::{
    aperture::Aperture,
    field,
    output,
    params::SimParams,
    result::{DataPoint, Results},
    settings::{load_config, Settings},
    sweep::generate_angles,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Computes the normalised far-field pattern for the given parameters and
/// observation angles (degrees). This is the pure call boundary consumed by
/// external display shells: no state, no I/O, output in caller order with
/// the same cardinality as the input, and bit-identical across repeated
/// invocations with identical inputs.
pub fn simulate(params: &SimParams, angles: &[f32]) -> Vec<DataPoint> {
    let aperture = Aperture::discretise(params);

    // Per-angle sums are independent; the normalisation pass needs the
    // complete sweep and therefore runs after the parallel map.
    let raw: Vec<f32> = angles
        .par_iter()
        .map(|&theta| field::intensity_at(theta, params, &aperture))
        .collect();

    Results::from_raw(angles, raw).points
}

/// A solvable diffraction problem: one parameter set and one angle sweep.
#[derive(Debug, Clone)]
pub struct Problem {
    pub settings: Settings, // runtime settings
    pub angles: Vec<f32>,   // observation angles in degrees
    pub result: Results,    // results of the problem
}

impl Problem {
    /// Creates a new `Problem` from `Settings`, or from the configuration
    /// files if none are given.
    pub fn new(settings: Option<Settings>) -> Self {
        let settings = settings.unwrap_or_else(|| load_config().expect("Failed to load config"));
        let angles = generate_angles(&settings.sweep.scheme);

        Self {
            settings,
            angles,
            result: Results::new_empty(),
        }
    }

    /// Resets the problem.
    pub fn reset(&mut self) {
        self.result = Results::new_empty();
    }

    /// Runs the angle sweep and fills `self.result`.
    pub fn solve(&mut self) {
        let start = Instant::now();
        println!("Solving problem...");

        let aperture = Aperture::discretise(&self.settings.params);

        let pb = ProgressBar::new(self.angles.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {bar:40.green/blue} {pos:>5}/{len:5} {msg} ETA: {eta_precise}",
            )
            .unwrap()
            .progress_chars("█▇▆▅▄▃▂▁")
        );
        pb.set_message("angle");

        let raw: Vec<f32> = self
            .angles
            .par_iter()
            .map(|&theta| {
                let intensity = field::intensity_at(theta, &self.settings.params, &aperture);
                pb.inc(1);
                intensity
            })
            .collect();
        pb.finish_and_clear();

        self.result = Results::from_raw(&self.angles, raw);

        let duration = start.elapsed();
        println!("Time taken: {:.2?}", duration);
    }

    pub fn writeup(&self) {
        let _ = output::write_sweep(&self.result, &self.settings.directory);
        let _ = output::write_sweep_json(&self.result, &self.settings.directory);
        let _ = output::write_summary(&self.settings, &self.result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{Scheme, SweepScheme};
    use std::path::PathBuf;

    fn reference_settings() -> Settings {
        Settings {
            directory: PathBuf::from("out"),
            params: SimParams {
                wavelength: 32.0,
                horn_aperture: 140.0,
                dist_l1: 600.0,
                dist_l2: 600.0,
                slit_width: 40.0,
                screen_width: 300.0,
                enable_edges: true,
            },
            sweep: SweepScheme {
                scheme: Scheme::Uniform {
                    start: -60.0,
                    end: 60.0,
                    step: 1.0,
                },
            },
        }
    }

    #[test]
    fn solve_fills_one_point_per_angle() {
        let mut problem = Problem::new(Some(reference_settings()));
        assert_eq!(problem.angles.len(), 121);

        problem.solve();
        assert_eq!(problem.result.points.len(), 121);
        assert!(problem.result.peak_raw.is_some());

        problem.reset();
        assert!(problem.result.points.is_empty());
    }

    #[test]
    fn solve_matches_the_pure_call_boundary() {
        let mut problem = Problem::new(Some(reference_settings()));
        problem.solve();

        let direct = simulate(&problem.settings.params, &problem.angles);
        assert_eq!(problem.result.points, direct);
    }
}
