//! Native window showing the live mural

use crate::io::error::Result;
use crate::mural::surface::Surface;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

/// Window sized to the mural surface
///
/// The window is reopened whenever the surface changes size, the way a canvas
/// element resizes with its bitmap.
pub struct MuralWindow {
    window: Window,
    title: String,
    dimensions: (u32, u32),
    background: u32,
    buffer: Vec<u32>,
}

impl MuralWindow {
    /// Open a window for a surface of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if the windowing backend cannot create the window
    pub fn new(title: &str, width: u32, height: u32, background: u32) -> Result<Self> {
        Ok(Self {
            window: open_window(title, width, height)?,
            title: title.to_string(),
            dimensions: (width, height),
            background,
            buffer: Vec::new(),
        })
    }

    /// False once the user closes the window or presses Escape
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Key codes pressed since the last update
    pub fn pressed_key_codes(&self) -> Vec<u32> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(key_code)
            .collect()
    }

    /// Show the surface, reopening the window first if its size changed
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be reopened or updated
    pub fn present(&mut self, surface: &Surface) -> Result<()> {
        let dimensions = surface.dimensions();
        if dimensions != self.dimensions {
            let (width, height) = dimensions;
            self.window = open_window(&self.title, width, height)?;
            self.dimensions = dimensions;
        }

        surface.write_framebuffer(self.background, &mut self.buffer);
        self.window.update_with_buffer(
            &self.buffer,
            dimensions.0 as usize,
            dimensions.1 as usize,
        )?;
        Ok(())
    }
}

fn open_window(title: &str, width: u32, height: u32) -> Result<Window> {
    let window = Window::new(
        title,
        width.max(1) as usize,
        height.max(1) as usize,
        WindowOptions::default(),
    )?;
    Ok(window)
}

/// Legacy key code for the keys the mural reacts to
pub const fn key_code(key: Key) -> Option<u32> {
    match key {
        Key::Space => Some(32),
        Key::Enter => Some(13),
        Key::Escape => Some(27),
        _ => None,
    }
}
