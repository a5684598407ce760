//! One request: map the angles, then apply the gate.
use super::bloch::{Angles, BlochVector};
use super::gates::Gate;
use super::state::{tidy_zero as tidy, QubitState};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub angles: Angles,
    pub gate: Gate,
    /// Vector before the gate.
    pub initial: BlochVector,
    /// Vector after the gate; equals `initial` for `Gate::Identity`.
    pub vector: BlochVector,
    /// Amplitudes of the un-gated state, as shown next to the plots.
    pub state: QubitState,
}

impl Evaluation {
    pub fn new(angles: Angles, gate: Gate) -> Self {
        let initial = angles.to_vector();
        Self {
            angles,
            gate,
            initial,
            vector: gate.apply(initial),
            state: QubitState::from_angles(angles),
        }
    }

    /// `X = 0.00, Y = 1.00, Z = 0.00`
    pub fn vector_line(&self, precision: usize) -> String {
        let v = &self.vector;
        format!(
            "X = {:.p$}, Y = {:.p$}, Z = {:.p$}",
            tidy(v.x, precision),
            tidy(v.y, precision),
            tidy(v.z, precision),
            p = precision
        )
    }
}
