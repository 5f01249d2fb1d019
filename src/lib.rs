//! SEDI - Slit and Edge Diffraction Interference.
//!
//! Computes the far-field intensity pattern of a single slit centred in a
//! finite-width obstructing screen, illuminated by a horn-like source. The
//! slit aperture and the two physical screen edges are modelled as point
//! sources whose complex wavelets are summed coherently at each observation
//! angle, so that interference between the primary slit pattern and the
//! edge-diffracted waves is captured. The full angular sweep is then
//! peak-normalised to 100.

pub mod aperture;
pub mod field;
pub mod output;
pub mod params;
pub mod problem;
pub mod result;
pub mod settings;
pub mod sweep;
