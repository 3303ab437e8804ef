// File: crates/bars-core/src/geometry.rs
// Summary: Computed chart geometry in absolute pixel coordinates, ready to draw verbatim.

use serde::Serialize;

/// One filled bar. `fill_color_index` is the series index; the theme palette resolves it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color_index: usize,
}

impl BarRect {
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
}

/// Straight line segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Tick and right-aligned, vertically centred text for one category label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTick {
    pub tick_y: f64,
    pub tick: Segment,
    pub text_x: f64,
    pub text_y: f64,
    pub text: String,
}

/// Vertical line at `x` from `y1` to `y2`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    pub ticks: Vec<CategoryTick>,
}

/// Gridline, tick mark and centred label for one round value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueTick {
    pub x: f64,
    pub value: f64,
    pub tick_label: String,
    pub gridline: Segment,
    pub tick: Segment,
    pub label_y: f64,
}

/// Horizontal line at `y` from `x1` to `x2`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueAxis {
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub ticks: Vec<ValueTick>,
}

/// Legend row: swatch square at `(x, y)` and the series name to its right.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub x: f64,
    pub y: f64,
    pub color_index: usize,
    pub swatch_size: f64,
    pub text_x: f64,
    pub text_y: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub axis_max_value: f64,
    pub content_height: f64,
    pub bars: Vec<BarRect>,
    pub category_axis: CategoryAxis,
    pub value_axis: ValueAxis,
    pub legend: Vec<LegendEntry>,
}

impl ChartGeometry {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Every coordinate in the geometry, for bulk sanity checks.
    pub fn coordinates(&self) -> Vec<f64> {
        let mut out = vec![self.width, self.height, self.axis_max_value, self.content_height];
        for b in &self.bars {
            out.extend([b.x, b.y, b.width, b.height]);
        }
        let ca = &self.category_axis;
        out.extend([ca.x, ca.y1, ca.y2]);
        for t in &ca.ticks {
            out.extend([t.tick_y, t.tick.x1, t.tick.y1, t.tick.x2, t.tick.y2, t.text_x, t.text_y]);
        }
        let va = &self.value_axis;
        out.extend([va.y, va.x1, va.x2]);
        for t in &va.ticks {
            out.extend([t.x, t.value, t.label_y]);
            for s in [t.gridline, t.tick] {
                out.extend([s.x1, s.y1, s.x2, s.y2]);
            }
        }
        for e in &self.legend {
            out.extend([e.x, e.y, e.swatch_size, e.text_x, e.text_y]);
        }
        out
    }
}
