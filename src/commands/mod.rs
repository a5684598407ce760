pub mod export;
pub mod gates;
pub mod state;

use crate::cli::StateArgs;
use crate::config::Settings;
use crate::core::{Angles, Evaluation, Gate};

/// Fill missing command-line values from the settings and evaluate.
pub fn evaluate(args: &StateArgs, settings: &Settings) -> Evaluation {
    let defaults = settings.default_angles();
    let angles = Angles::new(
        args.theta.unwrap_or(defaults.theta),
        args.phi.unwrap_or(defaults.phi),
    );
    let gate = match &args.gate {
        Some(label) => Gate::from_label(label),
        None => settings.default_gate(),
    };
    tracing::debug!(theta = angles.theta, phi = angles.phi, %gate, "evaluating");
    Evaluation::new(angles, gate)
}
