//! Single-qubit Bloch sphere explorer.
//!
//! [`crate::core`] holds the math: [`crate::core::map`] turns (θ, φ) into a Bloch vector and
//! [`crate::core::apply`] runs one of the fixed gates on it. The rest is the
//! command-line and terminal front end around those two calls.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod render;
pub mod tui;
