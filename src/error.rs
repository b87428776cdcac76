//! Error types for trazar operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trazar operations.
///
/// Both grid-contract variants ([`Error::InvalidDimensions`] and
/// [`Error::OutOfRange`]) are programming errors, not conditions a correct
/// rasterizer can trigger on valid input. Out-of-range access panics with the
/// formatted [`Error::OutOfRange`] message rather than clamping, since silent
/// clamping would corrupt exact-shape verification.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a grid.
    #[error("Invalid grid dimensions: {height}x{width}")]
    InvalidDimensions {
        /// Height value (rows).
        height: u32,
        /// Width value (columns).
        width: u32,
    },

    /// Cell access outside the grid bounds.
    #[error("Cell ({row}, {col}) out of range for {height}x{width} grid")]
    OutOfRange {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Grid height (rows).
        height: u32,
        /// Grid width (columns).
        width: u32,
    },
}
