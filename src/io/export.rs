//! PNG export of the current canvas as a download or a file

use crate::io::configuration::{
    DEFAULT_EXPORT_NAME, DOWNLOAD_MIME, EXPORT_KEY_CODE, EXPORT_PROMPT, PNG_MIME,
};
use crate::io::console::Prompter;
use crate::io::error::{MuralError, Result};
use crate::mural::surface::Surface;
use image::ImageFormat;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Encoded canvas handed to a download sink
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    /// Name the user chose for the file
    pub filename: String,
    /// Declared type of the payload
    pub mime_type: String,
    /// Encoded image bytes
    pub bytes: Vec<u8>,
}

/// Destination for downloads
pub trait DownloadSink {
    /// Deliver a download
    ///
    /// # Errors
    ///
    /// Returns an error if the download cannot be stored
    fn download(&mut self, download: &Download) -> Result<()>;
}

/// Writes downloads as files under a directory
#[derive(Clone, Debug)]
pub struct FileDownloadSink {
    directory: PathBuf,
}

impl FileDownloadSink {
    /// Store downloads under `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Where a download with this filename lands; always inside the directory
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.directory.join(download_name(filename))
    }
}

impl DownloadSink for FileDownloadSink {
    fn download(&mut self, download: &Download) -> Result<()> {
        let path = self.target_path(&download.filename);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MuralError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
        std::fs::write(&path, &download.bytes).map_err(|e| MuralError::FileSystem {
            path: path.clone(),
            operation: "write download",
            source: e,
        })?;
        tracing::info!(path = %path.display(), bytes = download.bytes.len(), "mural saved");
        Ok(())
    }
}

/// What an export attempt did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A download was delivered under this filename
    Downloaded(String),
    /// The user cancelled the filename prompt
    Cancelled,
}

/// Leaf name a download is saved under
///
/// Directory parts of the reply are discarded. A reply with no file name
/// (empty, `..`, a bare root) falls back to the default export name.
pub fn download_name(reply: &str) -> String {
    Path::new(reply)
        .file_name()
        .map_or_else(
            || DEFAULT_EXPORT_NAME.to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

/// Swap the PNG MIME type for a generic binary stream so it saves instead of displays
pub fn relabel_for_download(mime_type: &str) -> String {
    mime_type.replace(PNG_MIME, DOWNLOAD_MIME)
}

/// Encode the surface as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    surface
        .raster()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| MuralError::ImageExport {
            path: PathBuf::from("<memory>"),
            source: e,
        })?;
    Ok(bytes)
}

/// Export the current canvas through a filename prompt
///
/// Cancelling the prompt produces no download and no error.
///
/// # Errors
///
/// Returns an error if encoding fails or the sink rejects the download
pub fn export_frame(
    surface: &Surface,
    prompter: &mut impl Prompter,
    sink: &mut impl DownloadSink,
) -> Result<ExportOutcome> {
    let bytes = encode_png(surface)?;
    let mime_type = relabel_for_download(PNG_MIME);

    let Some(reply) = prompter.prompt(EXPORT_PROMPT, DEFAULT_EXPORT_NAME) else {
        tracing::info!("export cancelled");
        return Ok(ExportOutcome::Cancelled);
    };
    let filename = download_name(&reply);

    sink.download(&Download {
        filename: filename.clone(),
        mime_type,
        bytes,
    })?;
    Ok(ExportOutcome::Downloaded(filename))
}

/// True for the key that triggers an export
pub const fn is_export_key(key_code: u32) -> bool {
    key_code == EXPORT_KEY_CODE
}

/// Export on the export key; every other key is ignored
///
/// # Errors
///
/// Returns an error if the triggered export fails
pub fn handle_key_press(
    key_code: u32,
    surface: &Surface,
    prompter: &mut impl Prompter,
    sink: &mut impl DownloadSink,
) -> Result<Option<ExportOutcome>> {
    if !is_export_key(key_code) {
        return Ok(None);
    }
    export_frame(surface, prompter, sink).map(Some)
}

/// Save the surface as a PNG file, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_frame_as_png(surface: &Surface, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MuralError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    surface
        .raster()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MuralError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
