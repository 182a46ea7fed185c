//! Mosaic rendering core
//!
//! This module contains the drawing side of the mural:
//! - Color sampling from a bitmap
//! - The animated block and its renderer
//! - The drawing surface
//! - The per-frame driver and its schedulers

/// Block state, size oscillation and square rendering
pub mod block;
/// Color values and the per-pixel color table
pub mod color;
/// Mural state object and per-frame step
pub mod driver;
/// Frame pacing strategies
pub mod scheduler;
/// RGBA drawing surface
pub mod surface;

pub use driver::Mural;
