//! Persistent RGBA drawing surface the mural accumulates on

use crate::mural::color::Color;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

/// Drawing surface holding every block painted since the last clear
///
/// Starts fully transparent. Resizing discards the painted contents.
#[derive(Clone, Debug)]
pub struct Surface {
    raster: RgbaImage,
}

impl Surface {
    /// Create a transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raster: RgbaImage::new(width, height),
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Surface dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }

    /// Resize to new dimensions, leaving a transparent surface
    pub fn resize(&mut self, width: u32, height: u32) {
        self.raster = RgbaImage::new(width, height);
    }

    /// Draw a bitmap stretched to cover the whole surface
    ///
    /// Pixels are premultiplied while resampling and stored straight again
    /// afterwards, so fully transparent pixels read back as `[0, 0, 0, 0]` and
    /// their hidden color never bleeds into neighbours.
    pub fn draw_bitmap(&mut self, bitmap: &DynamicImage) {
        let (width, height) = self.dimensions();
        let mut rgba = bitmap.to_rgba8();
        rgba.pixels_mut().for_each(|pixel| pixel.0 = premultiply(pixel.0));
        if rgba.dimensions() != (width, height) {
            rgba = imageops::resize(&rgba, width, height, FilterType::Triangle);
        }
        rgba.pixels_mut().for_each(|pixel| pixel.0 = unpremultiply(pixel.0));
        self.raster = rgba;
    }

    /// Reset every pixel to transparent
    pub fn clear(&mut self) {
        self.raster
            .pixels_mut()
            .for_each(|pixel| *pixel = Rgba([0, 0, 0, 0]));
    }

    /// Fill an axis-aligned rectangle with an opaque color
    ///
    /// A pixel is covered when its center lies inside `[x, x + width)` by
    /// `[y, y + height)`. Anything off the surface is clipped.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let (cols_start, cols_end) = covered_span(x, width, self.width());
        let (rows_start, rows_end) = covered_span(y, height, self.height());
        let fill = Rgba(color.to_rgba());

        for row in rows_start..rows_end {
            for col in cols_start..cols_end {
                if let Some(pixel) = self.raster.get_pixel_mut_checked(col, row) {
                    *pixel = fill;
                }
            }
        }
    }

    /// RGBA bytes of the whole surface in row-major order
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.raster.as_raw()
    }

    /// Borrow the underlying raster
    pub const fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    /// Composite the surface over a background into `0x00RRGGBB` pixels
    pub fn write_framebuffer(&self, background: u32, out: &mut Vec<u32>) {
        out.clear();
        out.extend(
            self.raster
                .pixels()
                .map(|pixel| composite_over(pixel.0, background)),
        );
    }
}

// Half-open pixel range whose centers fall inside [start, start + length)
fn covered_span(start: f64, length: f64, limit: u32) -> (u32, u32) {
    let first = (start - 0.5).ceil();
    let end = (start + length - 0.5).ceil();
    let clamp = |value: f64| value.clamp(0.0, f64::from(limit)) as u32;
    (clamp(first), clamp(end))
}

fn premultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    let scale = |channel: u8| ((u32::from(channel) * u32::from(a) + 127) / 255) as u8;
    [scale(r), scale(g), scale(b), a]
}

fn unpremultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let alpha = u32::from(a);
    let scale = |channel: u8| ((u32::from(channel) * 255 + alpha / 2) / alpha).min(255) as u8;
    [scale(r), scale(g), scale(b), a]
}

fn composite_over(pixel: [u8; 4], background: u32) -> u32 {
    let [r, g, b, a] = pixel;
    let alpha = u32::from(a);
    let blend = |channel: u8, shift: u32| {
        let back = (background >> shift) & 0xFF;
        (u32::from(channel) * alpha + back * (255 - alpha)) / 255
    };
    (blend(r, 16) << 16) | (blend(g, 8) << 8) | blend(b, 0)
}
