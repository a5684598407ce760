//! The fixed single-qubit gate set and its action on Bloch vectors.
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};
use std::fmt;

use nalgebra::{Matrix2, Vector3};
use num_complex::Complex64 as C64;
use serde::{Serialize, Serializer};

use super::bloch::BlochVector;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gate {
    #[default]
    Identity,
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
}

impl Gate {
    pub const ALL: [Gate; 5] = [
        Gate::Identity,
        Gate::PauliX,
        Gate::PauliY,
        Gate::PauliZ,
        Gate::Hadamard,
    ];

    /// Resolve a user-facing label. Unknown labels resolve to `Identity`.
    pub fn from_label(label: &str) -> Gate {
        let key = label.trim().to_ascii_lowercase();
        match key.as_str() {
            "pauli-x" | "x (pauli-x)" | "x" | "paulix" => Gate::PauliX,
            "pauli-y" | "y (pauli-y)" | "y" | "pauliy" => Gate::PauliY,
            "pauli-z" | "z (pauli-z)" | "z" | "pauliz" => Gate::PauliZ,
            "hadamard" | "h" => Gate::Hadamard,
            _ => Gate::Identity,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gate::Identity => "None",
            Gate::PauliX => "Pauli-X",
            Gate::PauliY => "Pauli-Y",
            Gate::PauliZ => "Pauli-Z",
            Gate::Hadamard => "Hadamard",
        }
    }

    /// Closed-form formula of the Bloch action, for listings.
    pub fn formula(self) -> &'static str {
        match self {
            Gate::Identity => "(x, y, z)",
            Gate::PauliX => "(x, -y, -z)",
            Gate::PauliY => "(-x, y, -z)",
            Gate::PauliZ => "(-x, -y, z)",
            Gate::Hadamard => "((x+z)/√2, y, (z-x)/√2)",
        }
    }

    pub fn apply(self, v: BlochVector) -> BlochVector {
        let (x, y, z) = (v.x, v.y, v.z);
        match self {
            Gate::Identity => v,
            Gate::PauliX => Vector3::new(x, -y, -z),
            Gate::PauliY => Vector3::new(-x, y, -z),
            Gate::PauliZ => Vector3::new(-x, -y, z),
            Gate::Hadamard => Vector3::new((x + z) / SQRT_2, y, (z - x) / SQRT_2),
        }
    }

    /// 2x2 unitary of the gate in the computational basis.
    pub fn unitary(self) -> Matrix2<C64> {
        match self {
            Gate::Identity => Matrix2::identity(),
            Gate::PauliX => pauli_x(),
            Gate::PauliY => pauli_y(),
            Gate::PauliZ => pauli_z(),
            Gate::Hadamard => {
                let s = FRAC_1_SQRT_2;
                Matrix2::new(c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0))
            }
        }
    }

    /// Next gate in `ALL`, wrapping.
    pub fn next(self) -> Gate {
        let i = Gate::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Gate::ALL[(i + 1) % Gate::ALL.len()]
    }

    pub fn prev(self) -> Gate {
        let n = Gate::ALL.len();
        let i = Gate::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Gate::ALL[(i + n - 1) % n]
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Gate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.label())
    }
}

pub fn pauli_x() -> Matrix2<C64> {
    Matrix2::new(c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0))
}
pub fn pauli_y() -> Matrix2<C64> {
    Matrix2::new(c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0))
}
pub fn pauli_z() -> Matrix2<C64> {
    Matrix2::new(c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0))
}

pub fn apply(vector: BlochVector, gate: Gate) -> BlochVector {
    gate.apply(vector)
}

/// Same as [`apply`] but resolving a free-form label first.
pub fn apply_label(vector: BlochVector, label: &str) -> BlochVector {
    Gate::from_label(label).apply(vector)
}
