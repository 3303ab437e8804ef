// File: crates/bars-core/src/layout.rs
// Summary: Layout engine; turns a dataset and config into absolute chart geometry.

use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::dataset::ChartDataset;
use crate::error::LayoutResult;
use crate::geometry::{
    BarRect, CategoryAxis, CategoryTick, ChartGeometry, LegendEntry, Segment, ValueAxis, ValueTick,
};
use crate::scale::{axis_max_value, tick_values, BandScale, LinearScale};

/// Compute the full geometry for `dataset`.
///
/// Pure and deterministic: the same inputs always give an identical result.
/// Fails only when the dataset breaks its shape contract or the config is invalid.
pub fn compute_geometry(dataset: &ChartDataset, config: &LayoutConfig) -> LayoutResult<ChartGeometry> {
    config.validate()?;
    dataset.validate()?;

    let label_count = dataset.label_count();
    let series_count = dataset.series_count();

    let max_value = dataset.max_value();
    let axis_max = axis_max_value(max_value, config.tick_step);
    let x_scale = LinearScale::new((0.0, axis_max), (config.axis_x, config.value_axis_end()));

    let stride = config.bar_height + config.bar_padding;
    let total_bar_height = config.total_bar_height(series_count);
    let content_height = (total_bar_height + config.label_padding) * label_count as f64;
    let bands = BandScale::new(
        label_count,
        (0.0, content_height),
        config.band_padding_inner,
        config.band_padding_outer,
    );

    debug!(
        labels = label_count,
        series = series_count,
        max_value,
        axis_max,
        content_height,
        bandwidth = bands.bandwidth(),
        "computing chart layout"
    );

    let band_starts: Vec<f64> = (0..label_count).filter_map(|i| bands.band_start(i)).collect();

    // Series-major: every bar of series 0, then series 1, ...
    let mut bars = Vec::with_capacity(series_count * label_count);
    for (s, series) in dataset.series.iter().enumerate() {
        let offset = s as f64 * stride;
        for (&start, &value) in band_starts.iter().zip(&series.values) {
            bars.push(BarRect {
                x: config.axis_x,
                y: start + offset,
                width: (x_scale.map(value) - config.axis_x).max(0.0),
                height: config.bar_height,
                fill_color_index: s,
            });
        }
    }
    trace!(count = bars.len(), "placed bars");

    let text_x = config.axis_x - config.label_offset * 2.0;
    let category_ticks = dataset
        .labels
        .iter()
        .zip(&band_starts)
        .map(|(label, &start)| {
            let y = start + total_bar_height / 2.0;
            CategoryTick {
                tick_y: y,
                tick: Segment::new(config.axis_x - config.category_tick_length, y, config.axis_x, y),
                text_x,
                text_y: y,
                text: label.clone(),
            }
        })
        .collect();

    // Ticks depend only on the value range; with no labels the gridlines are zero-length.
    let value_ticks = tick_values(axis_max, config.tick_step)?
        .into_iter()
        .map(|value| {
            let x = x_scale.map(value);
            ValueTick {
                x,
                value,
                tick_label: format!("{value}"),
                gridline: Segment::new(x, 0.0, x, content_height),
                tick: Segment::new(x, content_height + config.value_tick_length, x, content_height),
                label_y: content_height + config.value_label_offset,
            }
        })
        .collect();

    let legend_x = config.legend_x();
    let legend = dataset
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let y = config.legend_y + i as f64 * config.legend_row_spacing;
            LegendEntry {
                x: legend_x,
                y,
                color_index: i,
                swatch_size: config.legend_swatch_size,
                text_x: legend_x + config.legend_text_dx,
                text_y: y + config.legend_text_dy,
                text: series.name.clone(),
            }
        })
        .collect();

    Ok(ChartGeometry {
        width: config.width,
        height: config.height,
        axis_max_value: axis_max,
        content_height,
        bars,
        category_axis: CategoryAxis {
            x: config.axis_x,
            y1: 0.0,
            y2: content_height,
            ticks: category_ticks,
        },
        value_axis: ValueAxis {
            y: content_height,
            x1: config.axis_x,
            x2: config.value_axis_end(),
            ticks: value_ticks,
        },
        legend,
    })
}
