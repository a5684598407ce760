//! 2D and 3D views of a Bloch vector.
pub mod projection;
pub mod svg;

use crate::config::RenderSettings;
use crate::core::BlochVector;
use projection::{figure_2d, figure_3d, Camera, Figure};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// x/y plane projection
    Flat,
    /// Orthographic wireframe sphere
    Sphere,
}

pub fn figure(view: View, v: &BlochVector, settings: &RenderSettings) -> Figure {
    match view {
        View::Flat => figure_2d(v, settings.samples),
        View::Sphere => {
            let camera = Camera::from_degrees(settings.azimuth_deg, settings.elevation_deg);
            figure_3d(v, &camera, settings.samples)
        }
    }
}
