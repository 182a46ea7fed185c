//! Input/output operations and error handling

/// Command-line parsing and the mural runners
pub mod cli;
/// Mural constants and configuration defaults
pub mod configuration;
/// Terminal prompts, notifications and dropped paths
pub mod console;
/// Drag-and-drop handling
pub mod dragdrop;
/// Error types
pub mod error;
/// PNG export and downloads
pub mod export;
/// Initial image choice, scaling and background loading
pub mod loader;
/// Progress bars for headless rendering
pub mod progress;
/// Native mural window
pub mod window;
