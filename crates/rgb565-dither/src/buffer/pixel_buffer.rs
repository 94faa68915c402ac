//! Dense row-major ARGB pixel buffer

use super::error::BufferError;
use crate::color::Argb;

/// An addressable `width x height` grid of [`Argb`] samples.
///
/// Storage is one contiguous row-major `Vec`; `(x, y)` lives at
/// `y * width + x`. Every constructor validates its input, so a
/// `PixelBuffer` that exists is always well formed: both dimensions are
/// non-zero and there is exactly one sample per coordinate.
///
/// # Example
///
/// ```
/// use rgb565_dither::{Argb, PixelBuffer};
///
/// let mut buffer = PixelBuffer::new(3, 2, Argb::BLACK).unwrap();
/// buffer.set(2, 1, Argb::WHITE).unwrap();
///
/// assert_eq!(buffer.get(2, 1), Some(Argb::WHITE));
/// assert_eq!(buffer.get(3, 1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single sample.
    pub fn new(width: usize, height: usize, fill: Argb) -> Result<Self, BufferError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Wrap existing samples (row-major).
    ///
    /// # Errors
    ///
    /// [`BufferError::LengthMismatch`] if `pixels.len() != width * height`,
    /// plus the dimension errors of [`PixelBuffer::new`].
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Argb>,
    ) -> Result<Self, BufferError> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(BufferError::LengthMismatch {
                expected: len,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from tightly packed `[r, g, b, a, r, g, b, a, ...]` bytes.
    pub fn from_rgba_bytes(width: usize, height: usize, rgba: &[u8]) -> Result<Self, BufferError> {
        let len = checked_len(width, height)?;
        let expected = len.checked_mul(4).ok_or(BufferError::DimensionOverflow {
            width,
            height,
        })?;
        if rgba.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|c| Argb::from_rgba([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `0xAARRGGBB` words.
    pub fn from_argb_u32(width: usize, height: usize, argb: &[u32]) -> Result<Self, BufferError> {
        let pixels = argb.iter().map(|&w| Argb::from_u32(w)).collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All samples, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Consume the buffer and return its samples.
    pub fn into_pixels(self) -> Vec<Argb> {
        self.pixels
    }

    /// Read the sample at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Argb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrite the sample at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if the coordinate is outside the buffer;
    /// the buffer is left untouched.
    pub fn set(&mut self, x: usize, y: usize, pixel: Argb) -> Result<(), BufferError> {
        if x >= self.width || y >= self.height {
            return Err(BufferError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[y * self.width + x] = pixel;
        Ok(())
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Argb]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Export as `[r, g, b, a, ...]` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            rgba.extend_from_slice(&px.to_rgba());
        }
        rgba
    }

    /// Export as packed `0xAARRGGBB` words.
    pub fn to_argb_u32(&self) -> Vec<u32> {
        self.pixels.iter().map(|px| px.to_u32()).collect()
    }

    /// Mutable access for the engine, which has already bounds-checked.
    #[inline]
    pub(crate) fn pixel_mut(&mut self, x: usize, y: usize) -> &mut Argb {
        debug_assert!(x < self.width && y < self.height);
        &mut self.pixels[y * self.width + x]
    }
}

/// Validate dimensions and return the sample count.
fn checked_len(width: usize, height: usize) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(BufferError::DimensionOverflow { width, height })
}
