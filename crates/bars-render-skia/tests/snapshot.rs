// File: crates/bars-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the sample chart to PNG bytes with labels off.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use bars_core::{compute_geometry, ChartDataset, LayoutConfig, Theme};
use bars_render_skia::{render_png_bytes, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(theme: Theme) -> Vec<u8> {
    let geometry = compute_geometry(&ChartDataset::sample(), &LayoutConfig::default()).expect("layout");
    let opts = RenderOptions { theme, scale: 1.0, draw_labels: false };
    render_png_bytes(&geometry, &opts).expect("render bytes")
}

#[test]
fn golden_sample_light() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/sample_light.png");
    write_or_compare(&path, &render(Theme::light()));
}

#[test]
fn golden_sample_dark() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/sample_dark.png");
    write_or_compare(&path, &render(Theme::dark()));
}

#[test]
fn png_decodes_to_canvas_size() {
    let img = image::load_from_memory(&render(Theme::light())).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1200, 800));
}
