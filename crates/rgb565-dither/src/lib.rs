//! rgb565-dither: error diffusion dithering to reduced channel depths
//!
//! This library takes a full-color RGBA pixel buffer and rewrites it in
//! place so that every red, green and blue sample is representable at a
//! reduced bit depth (5-6-5 by default), diffusing the quantization error
//! to neighbouring pixels so gradients survive the reduction.
//!
//! # Quick Start
//!
//! ```
//! use rgb565_dither::{apply_dithering, Argb, DitherAlgorithm, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::new(4, 4, Argb::new(255, 128, 128, 128)).unwrap();
//! apply_dithering(&mut buffer, DitherAlgorithm::FloydSteinberg);
//!
//! assert_eq!(buffer.get(0, 0), Some(Argb::new(255, 131, 129, 131)));
//! ```
//!
//! # Dithering Algorithms
//!
//! Four error diffusion kernels are available via [`DitherAlgorithm`]:
//!
//! - Sierra Lite (3 taps, 1/4)
//! - Sierra-2 (7 taps, 1/16)
//! - Floyd-Steinberg (4 taps, 1/16)
//! - Stucki (12 taps over 3 rows, 1/42)
//!
//! All four are plain data ([`Kernel`]) consumed by one engine,
//! [`diffuse_with_kernel`].
//!
//! ## Numeric Rules
//!
//! The output is meant to be bit-for-bit reproducible, so the arithmetic
//! is pinned down:
//!
//! ```text
//! quantize:  q = round(v * max / 255) * 255 / max     (max = 2^bits - 1,
//!                                                      integer division)
//! error:     e = v - q                                 (per channel, signed)
//! diffuse:   n = current + (weight / divisor) * e      (f64)
//!            n < 0   -> 0
//!            n > 255 -> 255
//!            else    -> floor(n)
//! ```
//!
//! Quantization rounds, diffusion floors. The asymmetry biases the
//! accumulated error slightly downwards.
//!
//! ## Scan Order
//!
//! Pixels are visited in raster order (rows top to bottom, columns left to
//! right). Every kernel tap points strictly "forward" in that order, so a
//! pixel is finalized the moment it is quantized and is never touched
//! again. Each pixel's value therefore depends on every pixel before it,
//! and the output cannot be reproduced by quantizing pixels independently.
//!
//! A pass is destructive, not reversible: the original samples are gone.
//! Because every output sample is on the reduced grid, a second pass over
//! the same buffer finds no error to diffuse and leaves it unchanged.
//!
//! Alpha is carried through untouched.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod quantize;

#[cfg(test)]
mod domain_tests;

pub use api::DitherError;
pub use buffer::{BufferError, PixelBuffer};
pub use color::Argb;
pub use dither::{
    apply_dithering, apply_dithering_with, diffuse_with_kernel, DitherAlgorithm, DitherOptions,
    Kernel, ParseAlgorithmError,
};
pub use quantize::{quantize_channel, quantize_pixel, ChannelDepth, DepthError};
