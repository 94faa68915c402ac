//! Error type for pixel buffer construction and access

use std::fmt;

/// Error returned when a [`PixelBuffer`](super::PixelBuffer) cannot be
/// built from the given data, or when a write lands outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// `width * height` does not fit in `usize`
    DimensionOverflow {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Input length does not match the dimensions
    ///
    /// Counted in the unit of the input: samples for `Argb`/`u32` input,
    /// bytes for RGBA byte input.
    LengthMismatch {
        /// Length required by the dimensions
        expected: usize,
        /// Length supplied
        actual: usize,
    },
    /// Coordinate outside `[0, width) x [0, height)`
    OutOfBounds {
        /// Requested x
        x: usize,
        /// Requested y
        y: usize,
        /// Buffer width
        width: usize,
        /// Buffer height
        height: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroDimension { width, height } => {
                write!(f, "buffer dimensions must be non-zero, got {}x{}", width, height)
            }
            BufferError::DimensionOverflow { width, height } => {
                write!(f, "buffer dimensions {}x{} overflow", width, height)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "data length mismatch: dimensions need {}, got {}",
                    expected, actual
                )
            }
            BufferError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate ({}, {}) outside {}x{} buffer",
                    x, y, width, height
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
