//! Unified error type for the rgb565-dither public API.
//!
//! The dithering pass itself cannot fail; everything here comes from
//! building its inputs.

use crate::buffer::BufferError;
use crate::dither::ParseAlgorithmError;
use crate::quantize::DepthError;
use std::fmt;

/// Unified error type for the rgb565-dither public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use rgb565_dither::{DitherAlgorithm, DitherError, PixelBuffer};
///
/// fn load(width: usize, height: usize, rgba: &[u8], alg: &str)
///     -> Result<(PixelBuffer, DitherAlgorithm), DitherError>
/// {
///     let buffer = PixelBuffer::from_rgba_bytes(width, height, rgba)?;
///     let algorithm = alg.parse::<DitherAlgorithm>()?;
///     Ok((buffer, algorithm))
/// }
///
/// assert!(load(1, 1, &[0, 0, 0, 255], "stucki").is_ok());
/// assert!(load(1, 1, &[0, 0, 0], "stucki").is_err());
/// ```
#[derive(Debug)]
pub enum DitherError {
    /// Invalid buffer dimensions, data length, or coordinate
    Buffer(BufferError),
    /// Invalid channel depth
    Depth(DepthError),
    /// Unknown algorithm name
    Algorithm(ParseAlgorithmError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Buffer(err) => write!(f, "buffer error: {}", err),
            DitherError::Depth(err) => write!(f, "depth error: {}", err),
            DitherError::Algorithm(err) => write!(f, "algorithm error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Buffer(err) => Some(err),
            DitherError::Depth(err) => Some(err),
            DitherError::Algorithm(err) => Some(err),
        }
    }
}

impl From<BufferError> for DitherError {
    fn from(err: BufferError) -> Self {
        DitherError::Buffer(err)
    }
}

impl From<DepthError> for DitherError {
    fn from(err: DepthError) -> Self {
        DitherError::Depth(err)
    }
}

impl From<ParseAlgorithmError> for DitherError {
    fn from(err: ParseAlgorithmError) -> Self {
        DitherError::Algorithm(err)
    }
}
