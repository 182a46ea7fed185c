//! Pixel color sampling into a flat hex color lookup

use crate::io::error::{Result, invalid_source};
use crate::mural::surface::Surface;
use std::fmt;

/// An opaque RGB color, displayed as `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from one RGBA sample, discarding alpha
    pub const fn from_rgba(pixel: [u8; 4]) -> Self {
        let [r, g, b, _] = pixel;
        Self { r, g, b }
    }

    /// Fully opaque RGBA bytes for this color
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }

    /// Hex string in `#rrggbb` form
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Linear table index for a canvas coordinate
///
/// Rows are offset by one: `x + (y - 1) * width`. The top row maps to negative
/// indices and the bottom-right corner one past the end, both of which miss
/// the table.
pub const fn pixel_index(x: i64, y: i64, width: u32) -> i64 {
    x + (y - 1) * width as i64
}

/// One color per pixel of the last sampled bitmap, in row-major order
///
/// Always rebuilt in full from a surface; never patched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    width: u32,
    height: u32,
    colors: Vec<Color>,
}

impl ColorTable {
    /// Build a table from raw RGBA bytes, four per pixel
    ///
    /// # Errors
    ///
    /// Returns an error if the byte count is not exactly `width * height * 4`
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(invalid_source(&format!(
                "{width}x{height} surface needs {expected} RGBA bytes, got {}",
                bytes.len()
            )));
        }

        let (pixels, _) = bytes.as_chunks::<4>();
        let colors = pixels.iter().map(|&pixel| Color::from_rgba(pixel)).collect();

        Ok(Self {
            width,
            height,
            colors,
        })
    }

    /// Sample every pixel currently on the surface
    pub fn sample(surface: &Surface) -> Self {
        let (pixels, _) = surface.as_rgba_bytes().as_chunks::<4>();
        Self {
            width: surface.width(),
            height: surface.height(),
            colors: pixels.iter().map(|&pixel| Color::from_rgba(pixel)).collect(),
        }
    }

    /// Width of the sampled bitmap
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the sampled bitmap
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of entries (always `width * height`)
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// True before any bitmap has been sampled
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at a raw linear index; negative or past-the-end indices miss
    pub fn get(&self, index: i64) -> Option<Color> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.colors.get(i))
            .copied()
    }

    /// Color for a canvas coordinate via [`pixel_index`]
    pub fn color_at(&self, x: i64, y: i64) -> Option<Color> {
        self.get(pixel_index(x, y, self.width))
    }

    /// All entries in row-major order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// All entries as `#rrggbb` strings
    pub fn hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|color| color.to_hex()).collect()
    }
}
