//! `blochview state`: one-shot evaluation printed as text or JSON.
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::StateArgs;
use crate::config::Settings;
use crate::core::{state::format_complex, BlochVector, Evaluation, Gate};

#[derive(Debug, Serialize)]
struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl From<&BlochVector> for Xyz {
    fn from(v: &BlochVector) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

#[derive(Debug, Serialize)]
struct Amplitude {
    re: f64,
    im: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    theta: f64,
    phi: f64,
    gate: Gate,
    initial: Xyz,
    vector: Xyz,
    alpha: Amplitude,
    beta: Amplitude,
    p0: f64,
    p1: f64,
    label: String,
}

impl Report {
    fn new(e: &Evaluation, precision: usize) -> Self {
        let (p0, p1) = e.state.probabilities();
        Self {
            theta: e.angles.theta,
            phi: e.angles.phi,
            gate: e.gate,
            initial: Xyz::from(&e.initial),
            vector: Xyz::from(&e.vector),
            alpha: Amplitude { re: e.state.alpha.re, im: e.state.alpha.im },
            beta: Amplitude { re: e.state.beta.re, im: e.state.beta.im },
            p0,
            p1,
            label: e.state.label(precision),
        }
    }
}

/// Plain-text report as (heading, value) rows.
pub fn report_rows(e: &Evaluation, precision: usize) -> Vec<(&'static str, String)> {
    let (p0, p1) = e.state.probabilities();
    let mut rows = Vec::with_capacity(5);
    if e.gate != Gate::Identity {
        rows.push(("Gate", format!("Applied {} Gate", e.gate)));
    }
    rows.push(("Quantum State", e.state.label(precision)));
    rows.push(("Amplitudes", format!(
        "α = {}, β = {}",
        format_complex(e.state.alpha, precision),
        format_complex(e.state.beta, precision)
    )));
    rows.push(("Bloch Vector", e.vector_line(precision)));
    rows.push(("Probabilities", format!(
        "P(|0⟩) = {:.p$}, P(|1⟩) = {:.p$}",
        p0,
        p1,
        p = precision
    )));
    rows
}

pub fn render_text(e: &Evaluation, precision: usize) -> String {
    report_rows(e, precision)
        .into_iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(e: &Evaluation, precision: usize) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::new(e, precision))?)
}

pub fn main(args: StateArgs, json: bool, settings: &Settings) -> Result<()> {
    let e = super::evaluate(&args, settings);
    let precision = settings.display.precision;
    if json {
        println!("{}", render_json(&e, precision)?);
        return Ok(());
    }
    for (k, v) in report_rows(&e, precision) {
        println!("{} {}", format!("{k}:").bold().magenta(), v);
    }
    Ok(())
}
