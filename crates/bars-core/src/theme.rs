// File: crates/bars-core/src/theme.rs
// Summary: RGBA colors, the categorical series palette, and light/dark theme presets.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Ten-color categorical palette (the "category10" scheme).
pub const CATEGORY10: [Color; 10] = [
    Color::from_hex(0x1f77b4),
    Color::from_hex(0xff7f0e),
    Color::from_hex(0x2ca02c),
    Color::from_hex(0xd62728),
    Color::from_hex(0x9467bd),
    Color::from_hex(0x8c564b),
    Color::from_hex(0xe377c2),
    Color::from_hex(0x7f7f7f),
    Color::from_hex(0xbcbd22),
    Color::from_hex(0x17becf),
];

/// Palette slot for a series index; cycles once the palette is exhausted.
#[inline]
pub fn palette_index(series_index: usize, palette_len: usize) -> usize {
    if palette_len == 0 { 0 } else { series_index % palette_len }
}

#[inline]
pub fn palette_color(series_index: usize) -> Color {
    CATEGORY10[palette_index(series_index, CATEGORY10.len())]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub grid: Color,
    pub tick: Color,
    pub text: Color,
    pub font_size: f32,
    pub palette: &'static [Color],
}

impl Theme {
    /// Black strokes on white, the look of the plain SVG output.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            grid: Color::BLACK,
            tick: Color::BLACK,
            text: Color::BLACK,
            font_size: 14.0,
            palette: &CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis_line: Color::from_argb(255, 180, 180, 190),
            grid: Color::from_argb(255, 40, 40, 45),
            tick: Color::from_argb(255, 150, 150, 160),
            text: Color::from_argb(255, 235, 235, 245),
            font_size: 14.0,
            palette: &CATEGORY10,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            tick: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            text: Color::from_argb(255, 0xff, 0xff, 0xff),
            font_size: 16.0,
            palette: &CATEGORY10,
        }
    }

    /// Color for a geometry `color_index`, cycling through this theme's palette.
    pub fn series_color(&self, color_index: usize) -> Color {
        self.palette
            .get(palette_index(color_index, self.palette.len()))
            .copied()
            .unwrap_or(Color::BLACK)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
