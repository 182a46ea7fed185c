//! Bitmap loading: initial pick, bounded scaling and background decoding

use crate::io::error::{MuralError, Result, invalid_source};
use image::DynamicImage;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Pick the initial image uniformly from the candidates
///
/// # Errors
///
/// Returns an error if the candidate list is empty
pub fn choose_initial<'a, R: Rng + ?Sized>(
    candidates: &'a [PathBuf],
    rng: &mut R,
) -> Result<&'a PathBuf> {
    candidates.choose(rng).ok_or(MuralError::EmptyCandidates)
}

/// Scale natural dimensions down to fit within the maximums
///
/// The width check runs first and the height check is applied afterwards to
/// the already-scaled dimensions, so an image over both limits is scaled
/// twice. Each step pins the offending side to its maximum and truncates the
/// other side to whole pixels. Images within bounds are returned unchanged.
///
/// # Errors
///
/// Returns an error if an input dimension is zero or a step truncates a
/// dimension to zero
pub fn scale_to_fit(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(invalid_source(&format!(
            "image has a zero dimension ({width}x{height})"
        )));
    }

    let (mut scaled_width, mut scaled_height) = (width, height);
    if scaled_width > max_width {
        scaled_height = rescale(scaled_height, max_width, scaled_width);
        scaled_width = max_width;
    }
    if scaled_height > max_height {
        scaled_width = rescale(scaled_width, max_height, scaled_height);
        scaled_height = max_height;
    }

    if scaled_width == 0 || scaled_height == 0 {
        return Err(invalid_source(&format!(
            "{width}x{height} image scales to {scaled_width}x{scaled_height}"
        )));
    }
    Ok((scaled_width, scaled_height))
}

// other * (target / current), truncated
fn rescale(other: u32, target: u32, current: u32) -> u32 {
    (u64::from(other) * u64::from(target) / u64::from(current)) as u32
}

/// Read and decode a bitmap from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or its bytes are not a
/// decodable image
pub fn read_bitmap(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| MuralError::FileSystem {
        path: path.to_path_buf(),
        operation: "read image",
        source: e,
    })?;
    image::load_from_memory(&bytes).map_err(|e| MuralError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Outcome of one background load
#[derive(Debug)]
pub enum LoadEvent {
    /// The bitmap decoded successfully
    Loaded {
        /// Where the bitmap came from
        path: PathBuf,
        /// Decoded bitmap at natural size
        bitmap: DynamicImage,
    },
    /// Reading or decoding failed
    Failed {
        /// Where the bitmap was expected
        path: PathBuf,
        /// Why loading failed
        error: MuralError,
    },
}

/// Anything that can accept a request to load a bitmap
pub trait LoadRequester {
    /// Start loading the bitmap at `path`
    fn request_load(&self, path: PathBuf);
}

/// Decodes bitmaps on worker threads and delivers them through a channel
///
/// The animation loop polls the channel between frames, so a load in flight
/// never interrupts painting.
pub struct ImageLoader {
    sender: Sender<LoadEvent>,
    events: Receiver<LoadEvent>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    /// Create a loader with an empty event queue
    pub fn new() -> Self {
        let (sender, events) = mpsc::channel();
        Self { sender, events }
    }

    /// Next finished load, if any, without blocking
    pub fn poll(&self) -> Option<LoadEvent> {
        self.events.try_recv().ok()
    }

    /// Block until the next load finishes
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel has disconnected
    pub fn wait(&self) -> Result<LoadEvent> {
        self.events.recv().ok().ok_or(MuralError::LoaderDisconnected)
    }
}

impl LoadRequester for ImageLoader {
    fn request_load(&self, path: PathBuf) {
        let sender = self.sender.clone();
        thread::spawn(move || {
            let event = match read_bitmap(&path) {
                Ok(bitmap) => LoadEvent::Loaded { path, bitmap },
                Err(error) => LoadEvent::Failed { path, error },
            };
            // The receiver only disappears at shutdown
            let _ = sender.send(event);
        });
    }
}
