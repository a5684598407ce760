//! User settings: `~/.blochview/config.toml`, overridable with `--config`.
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Angles, Gate};

/// Digits beyond this carry no information for an f64.
pub const MAX_PRECISION: usize = 17;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub state: StateDefaults,
    pub display: DisplaySettings,
    pub render: RenderSettings,
}

/// Starting point for θ, φ and the gate when the command line leaves them out.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StateDefaults {
    pub theta: f64,
    pub phi: f64,
    pub gate: String,
}

impl Default for StateDefaults {
    fn default() -> Self {
        Self { theta: FRAC_PI_2, phi: FRAC_PI_2, gate: "None".into() }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    /// Decimal places for vector components and amplitudes.
    pub precision: usize,
    /// Slider increment in radians.
    pub step: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { precision: 2, step: 0.01 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Points per wireframe curve.
    pub samples: usize,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    /// SVG canvas edge in pixels.
    pub size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { samples: 100, azimuth_deg: 30.0, elevation_deg: 20.0, size: 600 }
    }
}

impl Settings {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = toml::from_str(&txt)
            .with_context(|| format!("parsing {}", path.display()))?;
        settings.validate().with_context(|| format!("invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Explicit path must exist; the default path is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            if !p.exists() {
                bail!("config file not found: {}", p.display());
            }
            tracing::debug!(path = %p.display(), "loading config");
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => {
                tracing::debug!(path = %p.display(), "loading default config");
                Self::from_toml_file(&p)
            }
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.state.theta.is_finite() || !self.state.phi.is_finite() {
            bail!("state.theta and state.phi must be finite");
        }
        if self.display.precision > MAX_PRECISION {
            bail!("display.precision must be at most {MAX_PRECISION}");
        }
        if !(self.display.step.is_finite() && self.display.step > 0.0) {
            bail!("display.step must be a positive number");
        }
        if self.render.samples < 2 {
            bail!("render.samples must be at least 2");
        }
        if self.render.size == 0 {
            bail!("render.size must be non-zero");
        }
        Ok(())
    }

    pub fn default_angles(&self) -> Angles {
        Angles::new(self.state.theta, self.state.phi)
    }

    pub fn default_gate(&self) -> Gate {
        Gate::from_label(&self.state.gate)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".blochview").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_on_plus_y() {
        let s = Settings::default();
        assert_eq!(s.state.theta, FRAC_PI_2);
        assert_eq!(s.state.phi, FRAC_PI_2);
        assert_eq!(s.default_gate(), Gate::Identity);
        assert_eq!(s.display.precision, 2);
        assert_eq!(s.display.step, 0.01);
        assert_eq!(s.render.samples, 100);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[state]\ngate = \"Hadamard\"\n\n[display]\nprecision = 4\n").unwrap();
        let s = Settings::from_toml_file(&p).unwrap();
        assert_eq!(s.default_gate(), Gate::Hadamard);
        assert_eq!(s.display.precision, 4);
        assert_eq!(s.display.step, 0.01);
        assert_eq!(s.state.theta, FRAC_PI_2);
    }

    #[test]
    fn unknown_gate_label_in_file_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[state]\ngate = \"Toffoli\"\n").unwrap();
        assert_eq!(Settings::from_toml_file(&p).unwrap().default_gate(), Gate::Identity);
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("bad.toml");
        fs::write(&p, "[display]\nprecision = \"two\"\n").unwrap();
        let err = format!("{:#}", Settings::from_toml_file(&p).unwrap_err());
        assert!(err.contains("bad.toml"), "{err}");
    }

    #[test]
    fn rejects_non_positive_step() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[display]\nstep = 0.0\n").unwrap();
        assert!(Settings::from_toml_file(&p).is_err());
    }

    #[test]
    fn rejects_excessive_precision() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[display]\nprecision = 70000\n").unwrap();
        let err = format!("{:#}", Settings::from_toml_file(&p).unwrap_err());
        assert!(err.contains("invalid settings in"), "{err}");
        assert!(err.contains("display.precision"), "{err}");

        fs::write(&p, "[display]\nprecision = 17\n").unwrap();
        assert_eq!(Settings::from_toml_file(&p).unwrap().display.precision, 17);
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Some(dir.path().join("nope.toml"));
        assert!(Settings::load(&missing).is_err());
    }
}
