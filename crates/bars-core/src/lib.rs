// File: crates/bars-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, layout engine and render pass.

pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scale;
pub mod svg;
pub mod theme;

pub use config::LayoutConfig;
pub use dataset::{ChartDataset, Series};
pub use error::{DatasetError, LayoutError, LayoutResult};
pub use geometry::{BarRect, CategoryAxis, CategoryTick, ChartGeometry, LegendEntry, Segment, ValueAxis, ValueTick};
pub use layout::compute_geometry;
pub use render::{draw_geometry, DrawCommand, DrawSurface, RecordingSurface, TextAnchor, TextBaseline, TextStyle};
pub use svg::{render_svg_string, render_to_svg, SvgSurface};
pub use theme::{Color, Theme};
