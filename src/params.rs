use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

/// Physical configuration for a single simulation run. Immutable once built;
/// all lengths share one linear unit (millimetres in the reference setup).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SimParams {
    /// Wavelength of the illumination.
    pub wavelength: f32,
    /// Width of the radiating horn face.
    pub horn_aperture: f32,
    /// Source to slit-plane distance.
    pub dist_l1: f32,
    /// Slit-plane to detector distance.
    pub dist_l2: f32,
    /// Width of the slit aperture, centred in the screen.
    pub slit_width: f32,
    /// Total width of the obstructing screen.
    pub screen_width: f32,
    /// Whether the screen-edge diffraction contribution is summed in.
    #[serde(default = "default_enable_edges")]
    pub enable_edges: bool,
}

fn default_enable_edges() -> bool {
    true
}

impl SimParams {
    pub fn wavenumber(&self) -> f32 {
        2.0 * PI / self.wavelength
    }
}

impl fmt::Display for SimParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimParams:
  - Wavelength: {:.6}
  - Horn Aperture: {:.6}
  - Distance L1: {:.6}
  - Distance L2: {:.6}
  - Slit Width: {:.6}
  - Screen Width: {:.6}
  - Edge Diffraction: {}
  ",
            self.wavelength,
            self.horn_aperture,
            self.dist_l1,
            self.dist_l2,
            self.slit_width,
            self.screen_width,
            self.enable_edges,
        )
    }
}
