//! `blochview export`: write a static SVG figure.
use std::path::PathBuf;

use anyhow::Result;

use crate::cli::StateArgs;
use crate::config::Settings;
use crate::core::Evaluation;
use crate::io::atomic::atomic_write;
use crate::render::{figure, svg::to_svg, View};

pub fn render(e: &Evaluation, view: View, settings: &Settings) -> String {
    let fig = figure(view, &e.vector, &settings.render);
    let p = settings.display.precision;
    let caption = format!("{}   {}", e.state.label(p), e.vector_line(p));
    to_svg(&fig, settings.render.size, &caption)
}

pub fn main(args: StateArgs, view: View, out: PathBuf, settings: &Settings) -> Result<()> {
    let e = super::evaluate(&args, settings);
    let doc = render(&e, view, settings);
    atomic_write(&out, doc.as_bytes())?;
    tracing::info!(path = %out.display(), ?view, "figure written");
    println!("wrote {}", out.display());
    Ok(())
}
