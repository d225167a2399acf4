//! Error types and context helpers for grid operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::direction::Direction;

/// Main error type for all grid operations
///
/// Out-of-bounds access is not represented here: reads outside a grid
/// yield `None` and writes yield `false`.
#[derive(Debug)]
pub enum GridError {
    /// Cardinal-only operation called with a diagonal direction
    InvalidDirection {
        /// Name of the operation that rejected the direction
        operation: &'static str,
        /// The offending direction
        direction: Direction,
    },

    /// Text could not be parsed as a direction
    UnknownDirection {
        /// The unparsed input
        input: String,
    },

    /// Text could not be parsed as a coordinate
    InvalidCoord {
        /// The unparsed input
        input: String,
    },

    /// Rows of differing length where a rectangular grid is required
    RaggedGrid {
        /// Index of the first row whose length differs from row 0
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Input grid exceeds the configured dimension limit
    GridTooLarge {
        /// Number of rows in the input
        height: usize,
        /// Number of columns in the input
        width: usize,
        /// Maximum allowed size of either dimension
        limit: usize,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// Dense array construction failed
    Shape {
        /// Underlying ndarray error
        source: ndarray::ShapeError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection {
                operation,
                direction,
            } => {
                write!(
                    f,
                    "Invalid direction for {operation}: {direction} is not a cardinal direction"
                )
            }
            Self::UnknownDirection { input } => {
                write!(f, "Unknown direction '{input}'")
            }
            Self::InvalidCoord { input } => {
                write!(f, "Invalid coordinate '{input}': expected (row,col)")
            }
            Self::RaggedGrid {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Grid is not rectangular: row {row} has {found} columns, expected {expected}"
                )
            }
            Self::GridTooLarge {
                height,
                width,
                limit,
            } => {
                write!(
                    f,
                    "Grid of size {height}x{width} exceeds the dimension limit of {limit}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Shape { source } => {
                write!(f, "Array shape error: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Shape { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Attaches file context to I/O results
pub trait WithPath<T> {
    /// Convert an I/O failure into a [`GridError::FileSystem`] naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| GridError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<ndarray::ShapeError> for GridError {
    fn from(source: ndarray::ShapeError) -> Self {
        Self::Shape { source }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
