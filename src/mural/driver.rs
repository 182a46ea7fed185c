//! Animation state and the per-frame mosaic step

use crate::io::configuration::{
    INITIAL_SURFACE_HEIGHT, INITIAL_SURFACE_WIDTH, MAX_BLOCK_SIZE, MAX_HEIGHT, MAX_WIDTH,
    MIN_BLOCK_SIZE, SIZE_INCREMENT,
};
use crate::io::error::Result;
use crate::io::loader::scale_to_fit;
use crate::mural::block::{Block, SizeOscillator, draw_block};
use crate::mural::color::ColorTable;
use crate::mural::surface::Surface;
use image::DynamicImage;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Mural parameters controlling scaling and block oscillation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MuralConfig {
    /// Maximum surface width after scaling
    pub max_width: u32,
    /// Maximum surface height after scaling
    pub max_height: u32,
    /// Lower bound of the block size wave
    pub min_block_size: f64,
    /// Upper bound of the block size wave
    pub max_block_size: f64,
    /// Initial per-frame size step
    pub size_increment: f64,
}

impl Default for MuralConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
            min_block_size: MIN_BLOCK_SIZE,
            max_block_size: MAX_BLOCK_SIZE,
            size_increment: SIZE_INCREMENT,
        }
    }
}

/// Everything the animation reads and writes between frames
///
/// Loading a bitmap swaps the surface dimensions and the color table together,
/// so a frame never mixes coordinates from one image with colors from another.
pub struct Mural {
    config: MuralConfig,
    surface: Surface,
    table: ColorTable,
    block: Block,
    oscillator: SizeOscillator,
    rng: StdRng,
    running: bool,
    frames: u64,
}

impl Mural {
    /// Create an idle mural with default parameters
    pub fn new(seed: u64) -> Self {
        Self::with_config(MuralConfig::default(), seed)
    }

    /// Create an idle mural
    pub fn with_config(config: MuralConfig, seed: u64) -> Self {
        let block = Block {
            size: config.max_block_size,
            ..Block::default()
        };
        Self {
            config,
            surface: Surface::new(INITIAL_SURFACE_WIDTH, INITIAL_SURFACE_HEIGHT),
            table: ColorTable::default(),
            block,
            oscillator: SizeOscillator::new(
                config.min_block_size,
                config.max_block_size,
                config.size_increment,
            ),
            rng: StdRng::seed_from_u64(seed),
            running: false,
            frames: 0,
        }
    }

    /// Replace the source bitmap and restart painting from a blank surface
    ///
    /// Scales the bitmap into bounds, samples its colors, clears the surface,
    /// resets the block to full size and paints it once. The animation keeps
    /// its block and oscillation direction across loads.
    ///
    /// # Errors
    ///
    /// Returns an error if the bitmap has a zero dimension or scales to one
    pub fn load(&mut self, bitmap: &DynamicImage) -> Result<()> {
        let (width, height) = scale_to_fit(
            bitmap.width(),
            bitmap.height(),
            self.config.max_width,
            self.config.max_height,
        )?;

        self.surface.resize(width, height);
        self.surface.draw_bitmap(bitmap);
        self.table = ColorTable::sample(&self.surface);
        self.surface.clear();

        self.block.size = self.oscillator.max();
        draw_block(&self.block, &mut self.surface);
        self.running = true;

        tracing::debug!(
            width,
            height,
            colors = self.table.len(),
            "bitmap sampled"
        );
        Ok(())
    }

    /// Advance one frame; does nothing until a bitmap has loaded
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let (x, y) = self.random_position();
        self.block.x = x;
        self.block.y = y;
        // Misses keep the previous fill color
        if let Some(color) = self.table.color_at(x, y) {
            self.block.color = color;
        }
        draw_block(&self.block, &mut self.surface);

        self.oscillator.advance(&mut self.block.size);
        self.frames += 1;
    }

    // Rounded uniform coordinate in [0, width] x [0, height] of the current table
    fn random_position(&mut self) -> (i64, i64) {
        let width = f64::from(self.table.width());
        let height = f64::from(self.table.height());
        let x = (self.rng.random::<f64>() * width).round() as i64;
        let y = (self.rng.random::<f64>() * height).round() as i64;
        (x, y)
    }

    /// Parameters this mural was built with
    pub const fn config(&self) -> &MuralConfig {
        &self.config
    }

    /// Current drawing surface
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Color table of the current bitmap
    pub const fn table(&self) -> &ColorTable {
        &self.table
    }

    /// The animated block
    pub const fn block(&self) -> &Block {
        &self.block
    }

    /// Size oscillation state
    pub const fn oscillator(&self) -> &SizeOscillator {
        &self.oscillator
    }

    /// True once a bitmap has loaded
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Frames painted since creation
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}
