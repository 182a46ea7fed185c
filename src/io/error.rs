//! Error types for mural loading, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mural operations
#[derive(Debug)]
pub enum MuralError {
    /// Source image bytes could not be decoded
    ImageLoad {
        /// Path the bytes were read from
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Source image doesn't meet sampling requirements
    ///
    /// Occurs when:
    /// - The image has a zero dimension
    /// - Scaling truncates a dimension to zero pixels
    /// - A raw pixel buffer does not match its declared dimensions
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// The initial image candidate list was empty
    EmptyCandidates,

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save the canvas
    ImageExport {
        /// Destination of the export
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The display window could not be created or updated
    Window {
        /// Description reported by the windowing backend
        reason: String,
    },

    /// The frame timer thread stopped delivering ticks
    SchedulerStopped,

    /// The background image loader hung up
    LoaderDisconnected,
}

impl fmt::Display for MuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::EmptyCandidates => {
                write!(f, "No initial images to choose from")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Window { reason } => write!(f, "Window error: {reason}"),
            Self::SchedulerStopped => write!(f, "Frame timer stopped"),
            Self::LoaderDisconnected => write!(f, "Image loader disconnected"),
        }
    }
}

impl std::error::Error for MuralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mural results
pub type Result<T> = std::result::Result<T, MuralError>;

impl From<image::ImageError> for MuralError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MuralError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<minifb::Error> for MuralError {
    fn from(err: minifb::Error) -> Self {
        Self::Window {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MuralError {
    MuralError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> MuralError {
    MuralError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
