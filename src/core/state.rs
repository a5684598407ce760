//! Amplitude form of the qubit state: α|0⟩ + β|1⟩.
use nalgebra::{Matrix2, Vector2, Vector3};
use num_complex::Complex64 as C64;

use super::bloch::{Angles, BlochVector};
use super::gates::{pauli_x, pauli_y, pauli_z};

pub const SYMBOLIC_LABEL: &str = "cos(θ/2)|0⟩ + sin(θ/2)e^{iφ}|1⟩";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QubitState {
    pub alpha: C64,
    pub beta: C64,
}

impl QubitState {
    /// α = cos(θ/2), β = sin(θ/2)·e^{iφ}.
    pub fn from_angles(angles: Angles) -> Self {
        let half = angles.theta / 2.0;
        Self {
            alpha: C64::new(half.cos(), 0.0),
            beta: C64::from_polar(half.sin(), angles.phi),
        }
    }

    fn ket(&self) -> Vector2<C64> {
        Vector2::new(self.alpha, self.beta)
    }

    /// ⟨ψ|σ|ψ⟩ (real for Hermitian σ).
    fn expectation(&self, sigma: &Matrix2<C64>) -> f64 {
        let psi = self.ket();
        psi.dotc(&(sigma * psi)).re
    }

    /// (⟨X⟩, ⟨Y⟩, ⟨Z⟩).
    pub fn bloch_vector(&self) -> BlochVector {
        Vector3::new(
            self.expectation(&pauli_x()),
            self.expectation(&pauli_y()),
            self.expectation(&pauli_z()),
        )
    }

    /// Measurement probabilities (P(0), P(1)).
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }

    /// `|ψ⟩ = 0.71 |0⟩ + (0.00+0.71i) |1⟩`
    pub fn label(&self, precision: usize) -> String {
        format!(
            "|ψ⟩ = {:.p$} |0⟩ + ({}) |1⟩",
            tidy_zero(self.alpha.re, precision),
            format_complex(self.beta, precision),
            p = precision
        )
    }
}

/// `a+bi` / `a-bi` with fixed decimals; negative zero prints as zero.
pub fn format_complex(z: C64, precision: usize) -> String {
    let re = tidy_zero(z.re, precision);
    let im = tidy_zero(z.im, precision);
    let sign = if im.is_sign_negative() { '-' } else { '+' };
    format!("{:.p$}{}{:.p$}i", re, sign, im.abs(), p = precision)
}

/// Snap values that round to zero onto +0.0 so they never print as `-0.00`.
pub(crate) fn tidy_zero(v: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision as i32);
    if (v * scale).round() == 0.0 {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bloch::map;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn expectation_values_match_mapper() {
        for i in 0..=12 {
            for j in 0..12 {
                let a = Angles::new(PI * i as f64 / 12.0, 2.0 * PI * j as f64 / 12.0);
                let from_state = QubitState::from_angles(a).bloch_vector();
                let mapped = map(a.theta, a.phi);
                assert!((from_state - mapped).amax() < 1e-9, "{a:?}");
            }
        }
    }

    #[test]
    fn probabilities_sum_to_one() {
        let (p0, p1) = QubitState::from_angles(Angles::new(1.1, 4.0)).probabilities();
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn label_matches_display_format() {
        let s = QubitState::from_angles(Angles::new(FRAC_PI_2, FRAC_PI_2));
        assert_eq!(s.label(2), "|ψ⟩ = 0.71 |0⟩ + (0.00+0.71i) |1⟩");

        let south = QubitState::from_angles(Angles::new(PI, PI));
        assert_eq!(south.label(2), "|ψ⟩ = 0.00 |0⟩ + (-1.00+0.00i) |1⟩");
    }

    #[test]
    fn alpha_never_prints_negative_zero() {
        // θ just past π gives a tiny negative cos(θ/2)
        let s = QubitState::from_angles(Angles::new(PI + 1e-4, 0.0));
        assert!(s.alpha.re < 0.0);
        assert!(s.label(2).starts_with("|ψ⟩ = 0.00 |0⟩"), "{}", s.label(2));
    }

    #[test]
    fn complex_formatting_signs() {
        assert_eq!(format_complex(C64::new(0.5, -0.25), 2), "0.50-0.25i");
        assert_eq!(format_complex(C64::new(-0.0001, -0.0001), 2), "0.00+0.00i");
    }
}
