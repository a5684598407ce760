//! Interactive state behind the terminal view: sliders, gate picker, camera.
use crossterm::event::{KeyCode, KeyModifiers};

use crate::config::{RenderSettings, Settings};
use crate::core::{Angles, Evaluation, Gate};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Theta,
    Phi,
    Gate,
}

impl Control {
    fn next(self) -> Self {
        match self {
            Control::Theta => Control::Phi,
            Control::Phi => Control::Gate,
            Control::Gate => Control::Theta,
        }
    }
    fn prev(self) -> Self {
        match self {
            Control::Theta => Control::Gate,
            Control::Phi => Control::Theta,
            Control::Gate => Control::Phi,
        }
    }
}

pub struct App {
    pub angles: Angles,
    pub gate: Gate,
    pub focus: Control,
    pub step: f64,
    pub precision: usize,
    pub render: RenderSettings,
    pub status: String,
    pub quit: bool,
    initial: (Angles, Gate, RenderSettings),
}

pub const HELP: &str =
    "Tab/↑↓ focus • ←→ adjust (Shift ×10) • 0-4 gate • [ ] rotate 3D • r reset • q/Esc quit";

impl App {
    pub fn new(settings: &Settings) -> Self {
        let angles = settings.default_angles().clamped();
        let gate = settings.default_gate();
        Self {
            angles,
            gate,
            focus: Control::Theta,
            step: settings.display.step,
            precision: settings.display.precision,
            render: settings.render.clone(),
            status: HELP.into(),
            quit: false,
            initial: (angles, gate, settings.render.clone()),
        }
    }

    pub fn evaluation(&self) -> Evaluation {
        Evaluation::new(self.angles, self.gate)
    }

    fn set_status(&mut self, s: impl Into<String>) {
        self.status = s.into();
    }

    /// Move the focused control by `dir` steps.
    fn nudge(&mut self, dir: f64, coarse: bool) {
        let delta = dir * self.step * if coarse { 10.0 } else { 1.0 };
        match self.focus {
            Control::Theta => {
                self.angles = Angles::new(self.angles.theta + delta, self.angles.phi).clamped();
            }
            Control::Phi => {
                self.angles = Angles::new(self.angles.theta, self.angles.phi + delta).clamped();
            }
            Control::Gate => {
                self.gate = if dir > 0.0 { self.gate.next() } else { self.gate.prev() };
                self.set_status(if self.gate == Gate::Identity {
                    "No gate".to_string()
                } else {
                    format!("Applied {} Gate", self.gate)
                });
            }
        }
    }

    fn rotate(&mut self, degrees: f64) {
        self.render.azimuth_deg = (self.render.azimuth_deg + degrees).rem_euclid(360.0);
    }

    fn reset(&mut self) {
        let (angles, gate, render) = self.initial.clone();
        self.angles = angles;
        self.gate = gate;
        self.render = render;
        self.set_status("Reset to defaults");
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let coarse = modifiers.contains(KeyModifiers::SHIFT);
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.nudge(1.0, coarse),
            KeyCode::Left | KeyCode::Char('h') => self.nudge(-1.0, coarse),
            KeyCode::Char(d @ '0'..='4') => {
                let idx = d as usize - '0' as usize;
                self.gate = Gate::ALL[idx];
                self.focus = Control::Gate;
                self.set_status(format!("Gate → {}", self.gate));
            }
            KeyCode::Char('[') => self.rotate(-10.0),
            KeyCode::Char(']') => self.rotate(10.0),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('?') => self.set_status(HELP),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn starts_at_configured_defaults() {
        let a = app();
        assert_eq!(a.angles, Angles::new(PI / 2.0, PI / 2.0));
        assert_eq!(a.gate, Gate::Identity);
        assert_eq!(a.focus, Control::Theta);
    }

    #[test]
    fn arrows_step_and_clamp_theta() {
        let mut a = app();
        a.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert!((a.angles.theta - (PI / 2.0 + 0.01)).abs() < 1e-12);
        for _ in 0..100 {
            a.handle_key(KeyCode::Right, KeyModifiers::SHIFT);
        }
        assert_eq!(a.angles.theta, PI);
        for _ in 0..100 {
            a.handle_key(KeyCode::Left, KeyModifiers::SHIFT);
        }
        assert_eq!(a.angles.theta, 0.0);
    }

    #[test]
    fn out_of_range_defaults_start_clamped() {
        let mut s = Settings::default();
        s.state.theta = 5.0;
        s.state.phi = -1.0;
        let mut a = App::new(&s);
        assert_eq!(a.angles, Angles::new(PI, 0.0));
        a.focus = Control::Phi;
        a.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(a.angles.phi, 0.0);
        for _ in 0..100 {
            a.handle_key(KeyCode::Right, KeyModifiers::SHIFT);
        }
        assert_eq!(a.angles.phi, TAU);
    }

    #[test]
    fn focus_cycles_through_controls() {
        let mut a = app();
        a.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(a.focus, Control::Phi);
        a.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert!((a.angles.phi - (PI / 2.0 + 0.01)).abs() < 1e-12);
        a.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        a.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(a.gate, Gate::PauliX);
        assert_eq!(a.status, "Applied Pauli-X Gate");
        a.handle_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(a.focus, Control::Phi);
    }

    #[test]
    fn digits_pick_gate_and_reset_restores() {
        let mut a = app();
        a.handle_key(KeyCode::Char('4'), KeyModifiers::NONE);
        assert_eq!(a.gate, Gate::Hadamard);
        a.handle_key(KeyCode::Char(']'), KeyModifiers::NONE);
        assert_eq!(a.render.azimuth_deg, 40.0);
        a.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(a.gate, Gate::Identity);
        assert_eq!(a.render.azimuth_deg, 30.0);
    }

    #[test]
    fn quit_keys() {
        let mut a = app();
        a.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(a.quit);
        let mut b = app();
        b.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(b.quit);
    }
}
