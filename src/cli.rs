use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::render::View;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ViewKind {
    /// x/y plane projection
    #[value(name = "2d", alias = "flat")]
    Flat,
    /// Wireframe sphere
    #[value(name = "3d", alias = "sphere")]
    Sphere,
}

impl From<ViewKind> for View {
    fn from(k: ViewKind) -> Self {
        match k {
            ViewKind::Flat => View::Flat,
            ViewKind::Sphere => View::Sphere,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "blochview",
    about = "Bloch sphere explorer: pick θ, φ and a gate, see the qubit state",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct BlochCli {
    /// Global: path to config (TOML); default: ~/.blochview/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug-level logging on stderr (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

/// θ, φ and gate shared by the one-shot commands. Missing values come from config.
#[derive(Debug, Clone, clap::Args)]
pub struct StateArgs {
    /// Polar angle θ in radians (conventionally 0..π)
    #[arg(
        long = "theta",
        value_name = "RAD",
        allow_hyphen_values = true,
        value_parser = parse_angle
    )]
    pub theta: Option<f64>,

    /// Azimuthal angle φ in radians (conventionally 0..2π)
    #[arg(
        long = "phi",
        value_name = "RAD",
        allow_hyphen_values = true,
        value_parser = parse_angle
    )]
    pub phi: Option<f64>,

    /// Gate label: None, Pauli-X, Pauli-Y, Pauli-Z, Hadamard (unknown labels act as None)
    #[arg(short = 'g', long = "gate", value_name = "GATE")]
    pub gate: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the Bloch vector and state amplitudes
    ///
    /// Examples:
    ///   blochview state --theta 1.5708 --phi 0 --gate Pauli-Z
    ///   blochview state --theta 0 --json
    State {
        #[command(flatten)]
        state: StateArgs,

        /// Emit a JSON report instead of text
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// List the supported gates and their Bloch-vector action
    Gates,

    /// Write an SVG figure of the state
    Export {
        #[command(flatten)]
        state: StateArgs,

        /// Which view to draw
        #[arg(long = "view", value_enum, default_value_t = ViewKind::Sphere)]
        view: ViewKind,

        /// Output file path (short: -o)
        #[arg(short = 'o', long = "out", value_name = "FILE", default_value = "bloch.svg")]
        out: PathBuf,
    },

    /// Interactive terminal view with slider controls (default)
    Tui,
}

fn parse_angle(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|e| format!("not a number: {e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err("angle must be finite".into())
    }
}
