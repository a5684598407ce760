//! `blochview gates`: the supported gate set.
use anyhow::Result;
use colored::Colorize;

use crate::core::Gate;

pub fn listing() -> Vec<String> {
    Gate::ALL
        .iter()
        .map(|g| format!("{:<9} (x, y, z) -> {}", g.label(), g.formula()))
        .collect()
}

pub fn main() -> Result<()> {
    for (g, line) in Gate::ALL.iter().zip(listing()) {
        let (name, rest) = line.split_at(g.label().len());
        println!("{}{}", name.bold().yellow(), rest);
    }
    println!("{}", "Any other label is treated as None.".dimmed());
    Ok(())
}
