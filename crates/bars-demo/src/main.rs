// File: crates/bars-demo/src/main.rs
// Summary: Demo loads a JSON/CSV dataset (or the built-in sample), lays out the grouped bar chart,
// and writes SVG plus optional PNG and geometry JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bars_core::{compute_geometry, render_to_svg, theme, ChartDataset, LayoutConfig};
use bars_render_skia::{render_to_png, RenderOptions};
use clap::Parser;
use tracing::{info, warn};

/// Render a grouped horizontal bar chart.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dataset file (.json or .csv). Uses the built-in sample when omitted.
    dataset: Option<PathBuf>,

    /// JSON file overriding layout constants (only the named fields change)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset: light, dark, high-contrast-dark
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// Also rasterize to PNG
    #[arg(long)]
    png: bool,

    /// Device pixels per layout pixel for the PNG
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Also dump the computed geometry as JSON
    #[arg(long)]
    geometry_json: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // a host may already have installed a subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (dataset, stem) = match &cli.dataset {
        Some(path) => {
            let ds = ChartDataset::load(path)
                .with_context(|| format!("failed to load dataset '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (ds, stem)
        }
        None => (ChartDataset::sample(), "sample".to_string()),
    };
    info!(labels = dataset.labels.len(), series = dataset.series.len(), "dataset ready");
    if dataset.series.is_empty() || dataset.labels.is_empty() {
        warn!("dataset has no labels or no series; the chart will be mostly empty");
    }

    let config = match &cli.config {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => LayoutConfig::default(),
    };
    let theme = theme::find(&cli.theme);
    if !theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, using = theme.name, "unknown theme");
    }

    let geometry = compute_geometry(&dataset, &config).context("layout failed")?;
    info!(
        bars = geometry.bars.len(),
        axis_max = geometry.axis_max_value,
        content_height = geometry.content_height,
        "layout computed"
    );
    if geometry.content_height + config.value_label_offset > config.height {
        warn!(
            content_height = geometry.content_height,
            canvas_height = config.height,
            "chart content extends past the canvas bottom"
        );
    }

    let svg_path = out_path(&cli.out, &stem, "svg");
    render_to_svg(&geometry, &theme, &svg_path)
        .with_context(|| format!("writing {}", svg_path.display()))?;
    info!(path = %svg_path.display(), "wrote svg");

    if cli.png {
        let png_path = out_path(&cli.out, &stem, "png");
        let opts = RenderOptions { theme, scale: cli.scale, draw_labels: true };
        render_to_png(&geometry, &opts, &png_path)?;
        info!(path = %png_path.display(), "wrote png");
    }

    if cli.geometry_json {
        let json_path = out_path(&cli.out, &stem, "geometry.json");
        std::fs::write(&json_path, geometry.to_json_pretty()?)
            .with_context(|| format!("writing {}", json_path.display()))?;
        info!(path = %json_path.display(), "wrote geometry json");
    }

    Ok(())
}

/// Produce output file name like <out>/chart_<stem>.<ext>
fn out_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    dir.join(format!("chart_{stem}.{ext}"))
}
