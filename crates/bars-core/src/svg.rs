// File: crates/bars-core/src/svg.rs
// Summary: DrawSurface that writes plain SVG markup (lines, rects, anchored text).

use std::fmt::Write as _;
use std::path::Path;

use crate::geometry::{ChartGeometry, Segment};
use crate::render::{draw_geometry, DrawSurface, TextAnchor, TextBaseline, TextStyle};
use crate::theme::{Color, Theme};

/// Accumulates SVG elements; `finish` closes the document.
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self, color: Color) {
        // white is the SVG default; skip it to keep output minimal
        if color != Color::WHITE {
            let _ = writeln!(
                self.body,
                "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                self.width, self.height, color
            );
        }
    }

    fn line(&mut self, s: Segment, color: Color, stroke_width: f32) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            s.x1, s.y1, s.x2, s.y2, color, stroke_width
        );
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{fill}\"/>"
        );
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let baseline = match style.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        };
        let _ = writeln!(
            self.body,
            "  <text x=\"{x}\" y=\"{y}\" fill=\"{}\" font-size=\"{}\" text-anchor=\"{anchor}\" alignment-baseline=\"{baseline}\">{}</text>",
            style.color,
            style.size,
            escape(text)
        );
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Render geometry to a complete SVG document.
pub fn render_svg_string(geometry: &ChartGeometry, theme: &Theme) -> String {
    let mut surface = SvgSurface::new(geometry.width, geometry.height);
    draw_geometry(geometry, theme, &mut surface);
    surface.finish()
}

/// Render geometry to an SVG file, creating parent directories as needed.
pub fn render_to_svg(geometry: &ChartGeometry, theme: &Theme, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_svg_string(geometry, theme))
}
