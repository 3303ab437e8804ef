// File: crates/bars-core/src/render.rs
// Summary: Backend-agnostic render pass that walks chart geometry and issues drawing calls.

use crate::geometry::{ChartGeometry, Segment};
use crate::theme::{Color, Theme};

/// Horizontal placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
}

/// Sink for drawing primitives. Coordinates are canvas pixels, y growing downward.
pub trait DrawSurface {
    fn clear(&mut self, color: Color);
    fn line(&mut self, segment: Segment, color: Color, stroke_width: f32);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color);
    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);
}

/// Draw `geometry` onto `surface`. No layout decisions happen here; every
/// coordinate comes straight from the geometry.
pub fn draw_geometry<S: DrawSurface + ?Sized>(geometry: &ChartGeometry, theme: &Theme, surface: &mut S) {
    surface.clear(theme.background);

    let ca = &geometry.category_axis;
    let va = &geometry.value_axis;
    surface.line(Segment::new(ca.x, ca.y1, ca.x, ca.y2), theme.axis_line, 1.0);
    surface.line(Segment::new(va.x1, va.y, va.x2, va.y), theme.axis_line, 1.0);

    for bar in &geometry.bars {
        surface.rect(bar.x, bar.y, bar.width, bar.height, theme.series_color(bar.fill_color_index));
    }

    let label_style = TextStyle {
        color: theme.text,
        size: theme.font_size,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Middle,
    };
    for t in &ca.ticks {
        surface.line(t.tick, theme.tick, 1.0);
        surface.text(&t.text, t.text_x, t.text_y, label_style);
    }

    let tick_style = TextStyle { anchor: TextAnchor::Middle, ..label_style };
    for t in &va.ticks {
        surface.line(t.gridline, theme.grid, 1.0);
        surface.line(t.tick, theme.tick, 1.0);
        surface.text(&t.tick_label, t.x, t.label_y, tick_style);
    }

    let legend_style = TextStyle { anchor: TextAnchor::Start, ..label_style };
    for e in &geometry.legend {
        surface.rect(e.x, e.y, e.swatch_size, e.swatch_size, theme.series_color(e.color_index));
        surface.text(&e.text, e.text_x, e.text_y, legend_style);
    }
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line { segment: Segment, color: Color, stroke_width: f32 },
    Rect { x: f64, y: f64, width: f64, height: f64, fill: Color },
    Text { text: String, x: f64, y: f64, style: TextStyle },
}

/// Surface that records every call; handy for tests and headless inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Segment> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { segment, .. } => Some(segment),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rect_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }
    fn line(&mut self, segment: Segment, color: Color, stroke_width: f32) {
        self.commands.push(DrawCommand::Line { segment, color, stroke_width });
    }
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color) {
        self.commands.push(DrawCommand::Rect { x, y, width, height, fill });
    }
    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), x, y, style });
    }
}
