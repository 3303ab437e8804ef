// File: crates/bars-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws chart geometry into PNG files, PNG bytes or RGBA buffers.

pub mod text;

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use bars_core::{draw_geometry, ChartGeometry, Color, DrawSurface, Segment, TextStyle, Theme};

pub use text::TextShaper;

pub struct RenderOptions {
    pub theme: Theme,
    /// Device pixels per layout pixel.
    pub scale: f32,
    /// Text output depends on installed fonts; turn off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), scale: 1.0, draw_labels: true }
    }
}

#[inline]
pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// `DrawSurface` over a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: Option<&'a TextShaper>,
}

impl<'a> SkiaSurface<'a> {
    /// Pass `None` for `shaper` to skip text entirely.
    pub fn new(canvas: &'a skia::Canvas, shaper: Option<&'a TextShaper>) -> Self {
        Self { canvas, shaper }
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(to_skia_color(color));
    }

    fn line(&mut self, s: Segment, color: Color, stroke_width: f32) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia_color(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke_width);
        self.canvas.draw_line((s.x1 as f32, s.y1 as f32), (s.x2 as f32, s.y2 as f32), &paint);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia_color(fill));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        let rect = skia::Rect::from_xywh(x as f32, y as f32, width as f32, height as f32);
        self.canvas.draw_rect(rect, &paint);
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        if let Some(shaper) = self.shaper {
            shaper.draw_anchored(self.canvas, text, (x as f32, y as f32), style);
        }
    }
}

fn raster_surface(geometry: &ChartGeometry, opts: &RenderOptions) -> Result<skia::Surface> {
    let scale = if opts.scale.is_finite() && opts.scale > 0.0 { opts.scale } else { 1.0 };
    let w = (geometry.width as f32 * scale).ceil() as i32;
    let h = (geometry.height as f32 * scale).ceil() as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;

    let shaper = opts.draw_labels.then(TextShaper::new);
    let canvas = surface.canvas();
    canvas.save();
    canvas.scale((scale, scale));
    let mut target = SkiaSurface::new(canvas, shaper.as_ref());
    draw_geometry(geometry, &opts.theme, &mut target);
    canvas.restore();

    debug!(width = w, height = h, bars = geometry.bars.len(), "rasterized chart");
    Ok(surface)
}

/// Render to PNG bytes using a CPU raster surface.
pub fn render_png_bytes(geometry: &ChartGeometry, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = raster_surface(geometry, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    geometry: &ChartGeometry,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_png_bytes(geometry, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render to an unpremultiplied RGBA8 buffer. Returns `(pixels, width, height, stride)`.
pub fn render_to_rgba8(geometry: &ChartGeometry, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = raster_surface(geometry, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back {w}x{h} pixels");
    }
    Ok((pixels, w, h, stride))
}
