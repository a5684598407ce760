use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap,
    },
    Frame,
};
use std::f64::consts::{PI, TAU};

use super::app::{App, Control};
use crate::core::{state::SYMBOLIC_LABEL, Gate};
use crate::render::{figure, projection::Figure, View};

// ---------- Palette ----------
fn neon() -> (Color, Color, Color, Color) {
    (
        Color::Rgb(225, 0, 180),
        Color::Rgb(130, 0, 200),
        Color::Rgb(255, 240, 0),
        Color::Rgb(190, 190, 200),
    )
}

const SPHERE: Color = Color::Cyan;

pub fn draw(f: &mut Frame<'_>, app: &App) {
    let (accent, _, yellow, dim) = neon();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // main
            Constraint::Length(1), // status
        ])
        .split(f.size());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " B L O C H   V I E W ",
            Style::default().fg(Color::Black).bg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(format!("gate: {}", app.gate), Style::default().fg(yellow)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(header, rows[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(rows[1]);
    draw_controls(f, main[0], app);
    draw_plots(f, main[1], app);

    let status = Paragraph::new(Span::styled(app.status.as_str(), Style::default().fg(dim)));
    f.render_widget(status, rows[2]);
}

fn control_block(app: &App, title: &'static str, c: Control) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(title).border_style(focus_style(app, c))
}

fn focus_style(app: &App, c: Control) -> Style {
    let (accent, accent_alt, _, _) = neon();
    if app.focus == c {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent_alt)
    }
}

fn draw_controls(f: &mut Frame<'_>, area: Rect, app: &App) {
    let outer = Block::default().borders(Borders::ALL).title(" Quantum State Controls ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(Gate::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(inner);

    let p = app.precision;
    let theta = Gauge::default()
        .block(control_block(app, " Theta (rad) ", Control::Theta))
        .gauge_style(Style::default().fg(SPHERE))
        .ratio((app.angles.theta / PI).clamp(0.0, 1.0))
        .label(format!("{:.p$} / {:.p$}", app.angles.theta, PI));
    f.render_widget(theta, parts[0]);

    let phi = Gauge::default()
        .block(control_block(app, " Phi (rad) ", Control::Phi))
        .gauge_style(Style::default().fg(SPHERE))
        .ratio((app.angles.phi / TAU).clamp(0.0, 1.0))
        .label(format!("{:.p$} / {:.p$}", app.angles.phi, TAU));
    f.render_widget(phi, parts[1]);

    let items: Vec<ListItem> = Gate::ALL
        .iter()
        .enumerate()
        .map(|(i, g)| ListItem::new(format!("{i} {}", g.label())))
        .collect();
    let mut state = ListState::default();
    state.select(Gate::ALL.iter().position(|g| *g == app.gate));
    let gates = List::new(items)
        .block(control_block(app, " Quantum Gate ", Control::Gate))
        .highlight_style(Style::default().fg(Color::Black).bg(neon().2))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(gates, parts[2], &mut state);

    let e = app.evaluation();
    let details = Paragraph::new(vec![
        Line::from(Span::styled("Quantum State", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(SYMBOLIC_LABEL, Style::default().fg(neon().3))),
        Line::from(e.state.label(p)),
        Line::from(""),
        Line::from(Span::styled("Bloch Vector", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(e.vector_line(p)),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(details, parts[3]);
}

fn draw_plots(f: &mut Frame<'_>, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let v = app.evaluation().vector;
    draw_figure(f, cols[0], &figure(View::Flat, &v, &app.render));
    draw_figure(f, cols[1], &figure(View::Sphere, &v, &app.render));
}

/// Data bounds that keep the unit circle round inside `area`.
///
/// A terminal cell is roughly twice as tall as it is wide.
pub fn bounds_for(area: Rect, extent: f64) -> ([f64; 2], [f64; 2]) {
    let w = f64::from(area.width.max(1));
    let h = f64::from(area.height.max(1)) * 2.0;
    if w >= h {
        let sx = extent * w / h;
        ([-sx, sx], [-extent, extent])
    } else {
        let sy = extent * h / w;
        ([-extent, extent], [-sy, sy])
    }
}

fn draw_figure(f: &mut Frame<'_>, area: Rect, fig: &Figure) {
    let (_, accent_alt, _, dim) = neon();
    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", fig.title));
    let (xb, yb) = bounds_for(block.inner(area), fig.extent);
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(xb)
        .y_bounds(yb)
        .paint(|ctx| {
            for curve in &fig.curves {
                let color = if curve.hidden { Color::DarkGray } else { SPHERE };
                for w in curve.points.windows(2) {
                    ctx.draw(&CanvasLine { x1: w[0].0, y1: w[0].1, x2: w[1].0, y2: w[1].1, color });
                }
            }
            ctx.layer();
            let (tx, ty) = fig.arrow.tip;
            ctx.draw(&CanvasLine { x1: 0.0, y1: 0.0, x2: tx, y2: ty, color: accent_alt });
            if let Some(barbs) = fig.arrow.barbs(fig.extent * 0.08) {
                for (bx, by) in barbs {
                    ctx.draw(&CanvasLine { x1: tx, y1: ty, x2: bx, y2: by, color: accent_alt });
                }
            }
            for label in &fig.labels {
                let text = Span::styled(label.text.clone(), Style::default().fg(dim));
                ctx.print(label.at.0, label.at.1, text);
            }
        });
    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn bounds_widen_the_long_side() {
        let (x, y) = bounds_for(Rect::new(0, 0, 40, 10), 1.5);
        assert_eq!(y, [-1.5, 1.5]);
        assert_eq!(x, [-3.0, 3.0]);
        let (x, y) = bounds_for(Rect::new(0, 0, 10, 10), 1.0);
        assert_eq!(x, [-1.0, 1.0]);
        assert_eq!(y, [-2.0, 2.0]);
    }

    #[test]
    fn draws_without_panicking() {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        let app = App::new(&Settings::default());
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buf = terminal.backend().buffer();
        let text: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Quantum State Controls"));
        assert!(text.contains("Hadamard"));
    }
}
