use ndarray::Array1;

use crate::params::SimParams;
use crate::settings;

/// Point-source discretisation of the radiating and obstructing geometry.
/// Built once per simulation run; positions are offsets along the slit-plane
/// axis with the slit centred at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Aperture {
    /// Sample positions across the horn face. The field engine currently
    /// models the source as a single wavefront origin on the slit-plane
    /// axis, so these samples are not integrated over.
    pub horn: Vec<f32>,
    /// Sample positions across the slit aperture.
    pub slit: Vec<f32>,
    /// The two physical screen edges.
    pub edges: [f32; 2],
}

impl Aperture {
    /// Discretises the apertures for the given parameters. Sample counts are
    /// fixed quality constants and do not vary over a sweep.
    pub fn discretise(params: &SimParams) -> Self {
        Self {
            horn: span(params.horn_aperture, settings::N_HORN),
            slit: span(params.slit_width, settings::N_SLIT),
            edges: [-params.screen_width / 2.0, params.screen_width / 2.0],
        }
    }
}

/// Evenly spaced positions spanning `[-width/2, +width/2]`, endpoints included.
fn span(width: f32, num: usize) -> Vec<f32> {
    Array1::linspace(-width / 2.0, width / 2.0, num).to_vec()
}
