//! The single animated block and its size oscillation

use crate::io::configuration::{
    INITIAL_BLOCK_COLOR, INITIAL_BLOCK_POSITION, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE, SIZE_INCREMENT,
};
use crate::mural::color::Color;
use crate::mural::surface::Surface;

/// Square painted once per frame at a random position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    /// Center column
    pub x: i64,
    /// Center row
    pub y: i64,
    /// Side length in pixels
    pub size: f64,
    /// Fill color
    pub color: Color,
}

impl Block {
    /// Create a block centered on (x, y)
    pub const fn new(x: i64, y: i64, size: f64, color: Color) -> Self {
        Self { x, y, size, color }
    }
}

impl Default for Block {
    fn default() -> Self {
        let (x, y) = INITIAL_BLOCK_POSITION;
        Self::new(x, y, MAX_BLOCK_SIZE, INITIAL_BLOCK_COLOR)
    }
}

/// Triangle-wave driver for the block size
///
/// The bound check runs after the step, so the size can overshoot a bound by
/// one increment before the direction flips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeOscillator {
    min: f64,
    max: f64,
    increment: f64,
}

impl SizeOscillator {
    /// Create an oscillator over `[min, max]` starting with `increment`
    pub const fn new(min: f64, max: f64, increment: f64) -> Self {
        Self {
            min,
            max,
            increment,
        }
    }

    /// Lower bound
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Signed step applied on the next advance
    pub const fn increment(&self) -> f64 {
        self.increment
    }

    /// Step `size` once, reversing direction if it left `[min, max]`
    pub fn advance(&mut self, size: &mut f64) {
        *size += self.increment;
        if *size < self.min || *size > self.max {
            self.increment = -self.increment;
        }
    }
}

impl Default for SizeOscillator {
    fn default() -> Self {
        Self::new(MIN_BLOCK_SIZE, MAX_BLOCK_SIZE, SIZE_INCREMENT)
    }
}

/// Paint a block as a filled square centered on its position
pub fn draw_block(block: &Block, surface: &mut Surface) {
    let half = block.size / 2.0;
    surface.fill_rect(
        block.x as f64 - half,
        block.y as f64 - half,
        block.size,
        block.size,
        block.color,
    );
}
