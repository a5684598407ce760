//! Static SVG output for a [`Figure`].
use std::fmt::Write as _;

use super::projection::{Figure, Point};

const SPHERE: &str = "#00bcd4";
const ARROW: &str = "#800080";
const DIM: &str = "#9e9e9e";

struct Frame {
    size: f64,
    extent: f64,
    top: f64,
}

impl Frame {
    fn px(&self, (x, y): Point) -> (f64, f64) {
        let plot = self.size;
        let sx = (x + self.extent) / (2.0 * self.extent) * plot;
        let sy = self.top + (self.extent - y) / (2.0 * self.extent) * plot;
        (sx, sy)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Render `fig` to a standalone SVG document; `caption` goes under the title.
pub fn to_svg(fig: &Figure, size: u32, caption: &str) -> String {
    let header = 48.0;
    let frame = Frame { size: f64::from(size), extent: fig.extent, top: header };
    let height = f64::from(size) + header;
    let mut out = String::new();

    // write! into a String cannot fail
    let _ = writeln!(
        out,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{height}" "#,
            r#"viewBox="0 0 {size} {height}">"#
        ),
        size = size,
        height = height
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        out,
        concat!(
            r#"<text x="{:.1}" y="20" font-family="sans-serif" font-size="16" "#,
            r#"text-anchor="middle">{}</text>"#
        ),
        f64::from(size) / 2.0,
        escape(&fig.title)
    );
    let _ = writeln!(
        out,
        concat!(
            r#"<text x="{:.1}" y="40" font-family="sans-serif" font-size="12" "#,
            r#"text-anchor="middle">{}</text>"#
        ),
        f64::from(size) / 2.0,
        escape(caption)
    );

    for curve in &fig.curves {
        let pts: Vec<String> = curve
            .points
            .iter()
            .map(|p| {
                let (x, y) = frame.px(*p);
                format!("{x:.2},{y:.2}")
            })
            .collect();
        let (stroke, opacity, dash) = if curve.hidden {
            (DIM, 0.5, r#" stroke-dasharray="4 3""#)
        } else {
            (SPHERE, 0.8, "")
        };
        let _ = writeln!(
            out,
            concat!(
                r#"<polyline points="{}" fill="none" stroke="{stroke}" "#,
                r#"stroke-opacity="{opacity}" stroke-width="1"{dash}/>"#
            ),
            pts.join(" "),
            stroke = stroke,
            opacity = opacity,
            dash = dash
        );
    }

    let (ox, oy) = frame.px((0.0, 0.0));
    let (tx, ty) = frame.px(fig.arrow.tip);
    let _ = writeln!(
        out,
        concat!(
            r#"<line x1="{ox:.2}" y1="{oy:.2}" x2="{tx:.2}" y2="{ty:.2}" "#,
            r#"stroke="{ARROW}" stroke-width="3"/>"#
        ),
        ox = ox,
        oy = oy,
        tx = tx,
        ty = ty,
        ARROW = ARROW
    );
    if let Some([a, b]) = fig.arrow.barbs(fig.extent * 0.07) {
        let (ax, ay) = frame.px(a);
        let (bx, by) = frame.px(b);
        let _ = writeln!(
            out,
            r#"<polygon points="{tx:.2},{ty:.2} {ax:.2},{ay:.2} {bx:.2},{by:.2}" fill="{ARROW}"/>"#
        );
    }

    for label in &fig.labels {
        let (x, y) = frame.px(label.at);
        let _ = writeln!(
            out,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="13">{}</text>"#,
            escape(&label.text)
        );
    }
    out.push_str("</svg>\n");
    out
}
