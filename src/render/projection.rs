//! Geometry shared by the SVG writer and the terminal canvas.
//!
//! A [`Figure`] is a flat list of 2D polylines, one arrow and a few text
//! labels in data coordinates. Both views are symmetric around the origin,
//! so a figure only carries a half-extent.
use std::f64::consts::{PI, TAU};

use nalgebra::Vector3;

use crate::core::BlochVector;

pub type Point = (f64, f64);

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub points: Vec<Point>,
    /// Behind the sphere as seen by the camera; drawn dimmed.
    pub hidden: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrow {
    pub tip: Point,
}

impl Arrow {
    /// Two barb end points, or `None` when the arrow is too short to orient.
    pub fn barbs(&self, length: f64) -> Option<[Point; 2]> {
        let (x, y) = self.tip;
        let n = x.hypot(y);
        if n < 1e-6 {
            return None;
        }
        let (dx, dy) = (x / n, y / n);
        let (px, py) = (-dy, dx);
        let back = (x - dx * length, y - dy * length);
        let half = length * 0.5;
        Some([
            (back.0 + px * half, back.1 + py * half),
            (back.0 - px * half, back.1 - py * half),
        ])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub at: Point,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    pub extent: f64,
    pub curves: Vec<Curve>,
    pub arrow: Arrow,
    pub labels: Vec<Label>,
}

/// Orthographic camera looking at the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Camera {
    pub fn from_degrees(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth: azimuth.to_radians(), elevation: elevation.to_radians() }
    }

    /// Unit vector from the origin towards the viewer.
    pub fn view_dir(&self) -> Vector3<f64> {
        let (se, ce) = self.elevation.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        Vector3::new(ce * ca, ce * sa, se)
    }

    pub fn project(&self, p: &Vector3<f64>) -> Point {
        let (se, ce) = self.elevation.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        let right = Vector3::new(-sa, ca, 0.0);
        let up = Vector3::new(-se * ca, -se * sa, ce);
        (p.dot(&right), p.dot(&up))
    }

    /// Positive in front of the projection plane.
    pub fn depth(&self, p: &Vector3<f64>) -> f64 {
        p.dot(&self.view_dir())
    }
}

/// `n` evenly spaced values over `[a, b]`, endpoints included.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            (0..n).map(|i| a + step * i as f64).collect()
        }
    }
}

/// Meridians and parallels of the unit sphere as 3D polylines.
pub fn sphere_wireframe(
    samples: usize,
    meridians: usize,
    parallels: usize,
) -> Vec<Vec<Vector3<f64>>> {
    let mut out = Vec::with_capacity(meridians + parallels);
    for k in 0..meridians {
        let u = TAU * k as f64 / meridians as f64;
        let (su, cu) = u.sin_cos();
        out.push(
            linspace(0.0, PI, samples)
                .into_iter()
                .map(|v| Vector3::new(cu * v.sin(), su * v.sin(), v.cos()))
                .collect(),
        );
    }
    for k in 1..=parallels {
        let v = PI * k as f64 / (parallels + 1) as f64;
        let (sv, cv) = v.sin_cos();
        out.push(
            linspace(0.0, TAU, samples)
                .into_iter()
                .map(|u| Vector3::new(u.cos() * sv, u.sin() * sv, cv))
                .collect(),
        );
    }
    out
}

/// Project a 3D polyline, splitting it wherever it crosses the silhouette.
fn split_by_depth(camera: &Camera, line: &[Vector3<f64>]) -> Vec<Curve> {
    let mut curves: Vec<Curve> = Vec::new();
    for p in line {
        let hidden = camera.depth(p) < 0.0;
        let xy = camera.project(p);
        match curves.last_mut() {
            Some(cur) if cur.hidden == hidden => cur.points.push(xy),
            Some(cur) => {
                // share the crossing point so runs stay connected
                let last = *cur.points.last().unwrap_or(&xy);
                curves.push(Curve { points: vec![last, xy], hidden });
            }
            None => curves.push(Curve { points: vec![xy], hidden }),
        }
    }
    curves.retain(|c| c.points.len() > 1);
    curves
}

/// Unit circle with the vector projected onto the x/y plane.
pub fn figure_2d(v: &BlochVector, samples: usize) -> Figure {
    let circle = linspace(0.0, TAU, samples.max(8))
        .into_iter()
        .map(|t| (t.cos(), t.sin()))
        .collect();
    Figure {
        title: "2D Bloch Sphere Projection".into(),
        extent: 1.5,
        curves: vec![
            Curve { points: circle, hidden: false },
            Curve { points: vec![(-1.5, 0.0), (1.5, 0.0)], hidden: true },
            Curve { points: vec![(0.0, -1.5), (0.0, 1.5)], hidden: true },
        ],
        arrow: Arrow { tip: (v.x, v.y) },
        labels: vec![
            Label { at: (1.2, 0.05), text: "X".into() },
            Label { at: (0.05, 1.2), text: "Y".into() },
        ],
    }
}

/// Wireframe sphere, axes and the vector seen through `camera`.
pub fn figure_3d(v: &BlochVector, camera: &Camera, samples: usize) -> Figure {
    let mut curves = Vec::new();
    for line in sphere_wireframe(samples, 12, 5) {
        curves.extend(split_by_depth(camera, &line));
    }
    let axes = [
        (Vector3::<f64>::x(), "X"),
        (Vector3::<f64>::y(), "Y"),
        (Vector3::<f64>::z(), "|0⟩"),
    ];
    let mut labels = Vec::new();
    for (axis, name) in axes {
        let a = camera.project(&(-axis));
        let b = camera.project(&axis);
        curves.push(Curve { points: vec![a, b], hidden: true });
        labels.push(Label { at: camera.project(&(axis * 1.15)), text: name.into() });
    }
    labels.push(Label { at: camera.project(&(-Vector3::<f64>::z() * 1.15)), text: "|1⟩".into() });
    Figure {
        title: "3D Bloch Sphere".into(),
        extent: 1.3,
        curves,
        arrow: Arrow { tip: camera.project(v) },
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn wireframe_points_lie_on_sphere() {
        let wire = sphere_wireframe(20, 4, 3);
        assert_eq!(wire.len(), 7);
        for line in &wire {
            assert_eq!(line.len(), 20);
            for p in line {
                assert!((p.norm() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn camera_projection_is_orthonormal() {
        let cam = Camera::from_degrees(30.0, 20.0);
        // the view direction collapses to the origin
        let (x, y) = cam.project(&cam.view_dir());
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
        assert!((cam.depth(&cam.view_dir()) - 1.0).abs() < 1e-12);
        // north pole projects straight up
        let (nx, ny) = cam.project(&Vector3::z());
        assert!(nx.abs() < 1e-12);
        assert!((ny - 20f64.to_radians().cos()).abs() < 1e-12);
    }

    #[test]
    fn figure_2d_drops_z() {
        let f = figure_2d(&Vector3::new(0.6, -0.8, 0.0), 100);
        assert_eq!(f.arrow.tip, (0.6, -0.8));
        assert_eq!(f.extent, 1.5);
    }

    #[test]
    fn figure_3d_has_front_and_back_curves() {
        let f = figure_3d(&Vector3::z(), &Camera::from_degrees(30.0, 20.0), 50);
        assert!(f.curves.iter().any(|c| c.hidden));
        assert!(f.curves.iter().any(|c| !c.hidden));
        assert!(f.curves.iter().all(|c| c.points.len() >= 2));
    }

    #[test]
    fn barbs_skip_degenerate_arrow() {
        assert!(Arrow { tip: (0.0, 0.0) }.barbs(0.1).is_none());
        let [a, b] = Arrow { tip: (1.0, 0.0) }.barbs(0.1).unwrap();
        assert!((a.0 - 0.9).abs() < 1e-12 && (b.0 - 0.9).abs() < 1e-12);
        assert!((a.1 + b.1).abs() < 1e-12);
    }
}
