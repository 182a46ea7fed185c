//! Mural constants and runtime configuration defaults

use crate::mural::color::Color;

// Bitmaps larger than this are scaled down before sampling
/// Maximum surface width in pixels
pub const MAX_WIDTH: u32 = 1000;
/// Maximum surface height in pixels
pub const MAX_HEIGHT: u32 = 650;

/// Surface width before the first image finishes loading
pub const INITIAL_SURFACE_WIDTH: u32 = 100;
/// Surface height before the first image finishes loading
pub const INITIAL_SURFACE_HEIGHT: u32 = 100;

// Block size oscillates between these bounds as a triangle wave
/// Smallest block side length before the size starts growing again
pub const MIN_BLOCK_SIZE: f64 = 2.0;
/// Largest block side length, also the size after every image load
pub const MAX_BLOCK_SIZE: f64 = 70.0;
/// Per-frame size change; negative so the first sweep shrinks
pub const SIZE_INCREMENT: f64 = -1.0 / 50.0;

/// Block position before the first frame
pub const INITIAL_BLOCK_POSITION: (i64, i64) = (0, 75);
/// Block color before the first successful lookup
pub const INITIAL_BLOCK_COLOR: Color = Color::new(0x12, 0x34, 0x56);

/// Images the initial load picks from when none are given
pub const DEFAULT_IMAGES: [&str; 3] = ["ocean.jpg", "bird.jpg", "tree.jpg"];

// Export settings
/// Question shown when asking for the export filename
pub const EXPORT_PROMPT: &str = "Save picture as:";
/// Filename suggested by the export prompt
pub const DEFAULT_EXPORT_NAME: &str = "mural.png";
/// MIME type the canvas is encoded with
pub const PNG_MIME: &str = "image/png";
/// MIME type the encoded canvas is relabelled with to force a download
pub const DOWNLOAD_MIME: &str = "image/octet-stream";
/// Key code that triggers an export (spacebar)
pub const EXPORT_KEY_CODE: u32 = 32;

/// Notification shown when a drop carries no file
pub const NO_FILE_MESSAGE: &str = "no file";

// Display settings
/// Target frame rate for display-refresh and timer scheduling
pub const TARGET_FPS: u32 = 60;
/// Color shown behind unpainted (transparent) canvas pixels, 0x00RRGGBB
pub const PAGE_BACKGROUND: u32 = 0x00_FF_FF_FF;
/// Title of the mural window
pub const WINDOW_TITLE: &str = "Mosaic Mural";

/// Default headless export path
pub const DEFAULT_OUTPUT: &str = "mural.png";
/// Default directory interactive downloads are written to
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";
