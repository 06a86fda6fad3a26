//! Error types for crt-core operations.
//!
//! The geometry transforms themselves have no error channel: out-of-domain
//! inputs propagate as NaN or infinity. Errors only exist at the surfaces
//! that allocate or read data, such as building a correction map for a
//! pixel grid.
//!
//! # Usage
//!
//! ```rust
//! use crt_core::{Error, Result};
//!
//! fn check_grid(width: u32, height: u32) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height, "empty grid"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Used By
//!
//! - `crt-geometry` - Map and batch evaluation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the per-coordinate transforms.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid grid dimensions.
    ///
    /// Returned when width or height is zero, or the coordinate count
    /// would overflow `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A coordinate buffer does not match the grid it describes.
    #[error("length mismatch: expected {expected} coordinates, got {got}")]
    LengthMismatch {
        /// Expected coordinate count
        expected: usize,
        /// Actual coordinate count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Returns `true` if this is a dimension-related error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. } | Self::LengthMismatch { .. })
    }
}
