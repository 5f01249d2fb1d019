use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Observation angle sweep for the far-field pattern.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SweepScheme {
    pub scheme: Scheme,
}

/// Angle sweep scheme. Either a uniform sweep in degrees or an explicit
/// list of angles supplied by the caller.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub enum Scheme {
    #[serde(alias = "uniform")]
    Uniform { start: f32, end: f32, step: f32 },
    #[serde(alias = "custom")]
    Custom { angles: Vec<f32> },
}

/// Generate the observation angles (in degrees) for a sweep scheme.
/// Uniform sweeps include both endpoints; custom angle lists are passed
/// through untouched, preserving caller order.
pub fn generate_angles(scheme: &Scheme) -> Vec<f32> {
    match scheme {
        Scheme::Uniform { start, end, step } => {
            if !(*step > 0.0) || end < start {
                eprintln!("Warning: Invalid uniform sweep, using single angle {}", start);
                return vec![*start];
            }
            let num = ((end - start) / step).round() as usize + 1;
            Array1::linspace(*start, *end, num).to_vec()
        }
        Scheme::Custom { angles } => angles.clone(),
    }
}
