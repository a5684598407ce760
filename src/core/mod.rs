//! Bloch-sphere math: angle mapping, gate actions, amplitude form.
//! Everything here is pure; no I/O and no shared state.

pub mod bloch;
pub mod evaluation;
pub mod gates;
pub mod state;

pub use bloch::{map, Angles, BlochVector};
pub use evaluation::Evaluation;
pub use gates::{apply, apply_label, Gate};
pub use state::QubitState;
