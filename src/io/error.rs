//! Error types for grid construction, access and the file adapters

use std::fmt;
use std::path::PathBuf;

use crate::spatial::cell_index::CellIndex;

/// Address that failed a bounds check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// A geometric `(x, y)` coordinate
    Cell(CellIndex),
    /// A flat offset into the backing buffer
    Flat(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(cell) => write!(f, "cell {cell}"),
            Self::Flat(index) => write!(f, "flat index {index}"),
        }
    }
}

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// A grid was requested with a zero (or overflowing) dimension
    InvalidDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// A flat buffer cannot be laid out as rows of the requested width
    InvalidLayout {
        /// Requested row width
        width: usize,
        /// Length of the supplied buffer
        len: usize,
    },

    /// A checked accessor was given an address outside the grid
    IndexOutOfBounds {
        /// The offending address
        position: Position,
        /// Width of the grid that was accessed
        width: usize,
        /// Height of the grid that was accessed
        height: usize,
    },

    /// A region's start lies right of or below its end
    InvalidRegion {
        /// Top left corner of the region
        start: CellIndex,
        /// Bottom right corner of the region
        end: CellIndex,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// A user-supplied argument could not be interpreted
    InvalidArgument {
        /// Name of the argument
        parameter: &'static str,
        /// Value as supplied
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "Invalid grid dimensions {width}x{height}: both must be positive"
                )
            }
            Self::InvalidLayout { width, len } => {
                write!(
                    f,
                    "Cannot lay out {len} cells in rows of width {width}"
                )
            }
            Self::IndexOutOfBounds {
                position,
                width,
                height,
            } => {
                write!(f, "{position} is outside the {width}x{height} grid")
            }
            Self::InvalidRegion { start, end } => {
                write!(f, "Region start {start} exceeds region end {end}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
