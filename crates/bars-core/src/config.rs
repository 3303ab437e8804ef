// File: crates/bars-core/src/config.rs
// Summary: Layout constants (canvas size, bar metrics, paddings, legend placement).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, LayoutError, LayoutResult};

/// Default canvas width in pixels.
pub const WIDTH: f64 = 1200.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 800.0;

/// Every length used by the layout engine, in pixels unless noted.
/// Partial JSON overrides only the fields it names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub bar_height: f64,
    pub bar_padding: f64,
    /// Extra vertical room per label on top of its bar stack.
    pub label_padding: f64,
    /// Left edge of the plot; the category axis line sits here.
    pub axis_x: f64,
    pub label_offset: f64,
    /// Distance from the right canvas edge to the end of the value axis.
    pub value_axis_inset_right: f64,
    /// Data units between value-axis ticks.
    pub tick_step: f64,
    /// Fraction of a band step left empty between bands.
    pub band_padding_inner: f64,
    /// Fraction of a band step reserved before the first and after the last band.
    pub band_padding_outer: f64,
    pub category_tick_length: f64,
    pub value_tick_length: f64,
    /// Distance below the value axis to the middle of the tick labels.
    pub value_label_offset: f64,
    pub legend_offset_from_right: f64,
    pub legend_y: f64,
    pub legend_row_spacing: f64,
    pub legend_swatch_size: f64,
    pub legend_text_dx: f64,
    pub legend_text_dy: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            bar_height: 20.0,
            bar_padding: 10.0,
            label_padding: 20.0,
            axis_x: 100.0,
            label_offset: 10.0,
            value_axis_inset_right: 100.0,
            tick_step: 100.0,
            band_padding_inner: 0.1,
            band_padding_outer: 0.0,
            category_tick_length: 15.0,
            value_tick_length: 10.0,
            value_label_offset: 30.0,
            legend_offset_from_right: 150.0,
            legend_y: 60.0,
            legend_row_spacing: 30.0,
            legend_swatch_size: 20.0,
            legend_text_dx: 25.0,
            legend_text_dy: 15.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bar_metrics(mut self, bar_height: f64, bar_padding: f64) -> Self {
        self.bar_height = bar_height;
        self.bar_padding = bar_padding;
        self
    }

    pub fn with_axis_x(mut self, axis_x: f64) -> Self {
        self.axis_x = axis_x;
        self
    }

    pub fn with_tick_step(mut self, tick_step: f64) -> Self {
        self.tick_step = tick_step;
        self
    }

    pub fn with_band_padding(mut self, inner: f64, outer: f64) -> Self {
        self.band_padding_inner = inner;
        self.band_padding_outer = outer;
        self
    }

    /// Right end of the value axis.
    #[inline]
    pub fn value_axis_end(&self) -> f64 {
        self.width - self.value_axis_inset_right
    }

    #[inline]
    pub fn legend_x(&self) -> f64 {
        self.width - self.legend_offset_from_right
    }

    /// Vertical space one label's bar stack takes for `series_count` series.
    #[inline]
    pub fn total_bar_height(&self, series_count: usize) -> f64 {
        (self.bar_height + self.bar_padding) * series_count as f64
    }

    pub fn validate(&self) -> LayoutResult<()> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("bar_height", self.bar_height),
            ("bar_padding", self.bar_padding),
            ("label_padding", self.label_padding),
            ("axis_x", self.axis_x),
            ("label_offset", self.label_offset),
            ("value_axis_inset_right", self.value_axis_inset_right),
            ("tick_step", self.tick_step),
            ("category_tick_length", self.category_tick_length),
            ("value_tick_length", self.value_tick_length),
            ("value_label_offset", self.value_label_offset),
            ("legend_offset_from_right", self.legend_offset_from_right),
            ("legend_y", self.legend_y),
            ("legend_row_spacing", self.legend_row_spacing),
            ("legend_swatch_size", self.legend_swatch_size),
            ("legend_text_dx", self.legend_text_dx),
            ("legend_text_dy", self.legend_text_dy),
        ];
        if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LayoutError::InvalidConfig(format!("{name} must be finite, got {v}")));
        }
        if self.bar_height <= 0.0 {
            return Err(LayoutError::InvalidConfig("bar_height must be positive".to_owned()));
        }
        if self.bar_padding < 0.0 || self.label_padding < 0.0 {
            return Err(LayoutError::InvalidConfig("paddings must be non-negative".to_owned()));
        }
        if self.tick_step <= 0.0 {
            return Err(LayoutError::InvalidConfig("tick_step must be positive".to_owned()));
        }
        if self.axis_x >= self.value_axis_end() {
            return Err(LayoutError::InvalidConfig(format!(
                "value axis is empty: axis_x={} but it ends at {}",
                self.axis_x,
                self.value_axis_end()
            )));
        }
        for (name, p) in [("band_padding_inner", self.band_padding_inner), ("band_padding_outer", self.band_padding_outer)] {
            if !(0.0..1.0).contains(&p) {
                return Err(LayoutError::InvalidConfig(format!("{name} must be in [0, 1), got {p}")));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }
}
