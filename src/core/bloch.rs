//! Spherical angles to Bloch-sphere coordinates.
use std::f64::consts::{PI, TAU};

use nalgebra::Vector3;

/// Point on (or inside) the unit sphere: (x, y, z).
pub type BlochVector = Vector3<f64>;

/// Polar angle θ and azimuthal angle φ, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angles {
    pub theta: f64,
    pub phi: f64,
}

impl Angles {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// θ clamped into [0, π], φ clamped into [0, 2π].
    ///
    /// Both ends are inclusive, matching the slider ranges.
    pub fn clamped(self) -> Self {
        Self { theta: self.theta.clamp(0.0, PI), phi: self.phi.clamp(0.0, TAU) }
    }

    pub fn to_vector(self) -> BlochVector {
        map(self.theta, self.phi)
    }
}

/// x = sin θ cos φ, y = sin θ sin φ, z = cos θ.
///
/// Total over all finite inputs; angles are not clamped.
pub fn map(theta: f64, phi: f64) -> BlochVector {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Vector3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
}
