//! Animated mosaic mural painted from the pixel colors of an image
//!
//! A source image is scaled into bounds and sampled into a per-pixel color
//! table. Every frame a square block is painted at a random position in the
//! color found there, while the block size sweeps up and down between fixed
//! bounds. Dropping a new image swaps the colors without stopping the
//! animation, and the canvas can be exported as a PNG at any time.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Color sampling, block rendering and the animation driver
pub mod mural;

pub use io::error::{MuralError, Result};
