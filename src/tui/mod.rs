//! Full-screen interactive view: sliders on the left, 2D and 3D plots on the right.
pub mod app;
pub mod ui;

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Settings;
use app::App;

pub fn run_tui(settings: &Settings) -> Result<()> {
    terminal::enable_raw_mode().context("enabling raw terminal mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Bloch View"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(settings);
    let res = panic::catch_unwind(AssertUnwindSafe(|| run_app(&mut terminal, app)));

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(inner) => inner,
        Err(payload) => {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic>".into()
            };
            tracing::error!(%msg, "terminal view panicked");
            anyhow::bail!("terminal view crashed: {msg}")
        }
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    while !app.quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event::read()? {
                // held arrows arrive as Repeat; treat them like presses so sliders glide
                if matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    app.handle_key(code, modifiers);
                }
            }
        }
    }
    tracing::debug!(
        theta = app.angles.theta,
        phi = app.angles.phi,
        gate = %app.gate,
        "leaving terminal view"
    );
    Ok(())
}
