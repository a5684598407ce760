//! Pauli rows of the gate table against U ρ U† on the density matrix.
use nalgebra::{Matrix2, Vector3};
use num_complex::Complex64 as C64;

use blochview::core::gates::{pauli_x, pauli_y, pauli_z};
use blochview::core::{map, Angles, BlochVector, Gate, QubitState};

fn density(v: &BlochVector) -> Matrix2<C64> {
    let half = C64::new(0.5, 0.0);
    (Matrix2::<C64>::identity()
        + pauli_x() * C64::new(v.x, 0.0)
        + pauli_y() * C64::new(v.y, 0.0)
        + pauli_z() * C64::new(v.z, 0.0))
        * half
}

fn bloch_of(rho: &Matrix2<C64>) -> BlochVector {
    Vector3::new(
        (rho * pauli_x()).trace().re,
        (rho * pauli_y()).trace().re,
        (rho * pauli_z()).trace().re,
    )
}

#[test]
fn pauli_rows_match_conjugation() {
    for g in [Gate::PauliX, Gate::PauliY, Gate::PauliZ, Gate::Identity] {
        let u = g.unitary();
        for (theta, phi) in [(0.3, 0.1), (1.2, 2.0), (2.9, 5.5), (1.5707963267948966, 4.0)] {
            let v = map(theta, phi);
            let rotated = bloch_of(&(u * density(&v) * u.adjoint()));
            assert!((rotated - g.apply(v)).amax() < 1e-12, "{g} at ({theta}, {phi})");
        }
    }
}

#[test]
fn density_round_trip() {
    let v = map(0.7, 1.9);
    assert!((bloch_of(&density(&v)) - v).amax() < 1e-12);
}

#[test]
fn state_amplitudes_reproduce_mapper() {
    let a = Angles::new(2.2, 3.3);
    let s = QubitState::from_angles(a);
    assert!((s.bloch_vector() - map(a.theta, a.phi)).amax() < 1e-12);
    let (p0, p1) = s.probabilities();
    assert!((p0 - (a.theta / 2.0).cos().powi(2)).abs() < 1e-12);
    assert!((p0 + p1 - 1.0).abs() < 1e-12);
}
