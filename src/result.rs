use serde::Serialize;

use crate::settings::PEAK_INTENSITY;

/// One sample of the normalised far-field pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    /// Observation angle in degrees, as supplied by the sweep.
    pub theta: f32,
    /// Intensity normalised so the sweep peak equals 100.
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub points: Vec<DataPoint>,
    /// Maximum unnormalised intensity of the sweep, if the sweep was
    /// non-empty and finite.
    pub peak_raw: Option<f32>,
}

impl Results {
    /// Creates an empty `Results`.
    pub fn new_empty() -> Self {
        Self {
            points: Vec::new(),
            peak_raw: None,
        }
    }

    /// Peak-normalises a complete sweep of unnormalised intensities.
    ///
    /// This is a whole-sweep operation: the reference is the maximum over
    /// all angles, so it can only run once every per-angle sum is in. A
    /// non-positive maximum (all-zero or empty sweep) is replaced by 1, so
    /// all-zero input maps to all-zero output instead of dividing by zero.
    pub fn from_raw(angles: &[f32], raw: Vec<f32>) -> Self {
        let peak = raw.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let reference = if peak > 0.0 { peak } else { 1.0 };

        let points = angles
            .iter()
            .zip(raw)
            .map(|(&theta, intensity)| DataPoint {
                theta,
                intensity: intensity / reference * PEAK_INTENSITY,
            })
            .collect();

        Self {
            points,
            peak_raw: if peak.is_finite() { Some(peak) } else { None },
        }
    }
}
