//! Error diffusion dithering.
//!
//! # Algorithms
//!
//! Four diffusion kernels are available, selected with [`DitherAlgorithm`]:
//!
//! - **Sierra Lite**: 3 taps, the cheapest
//! - **Sierra-2**: 7 taps over 2 rows
//! - **Floyd-Steinberg**: the classic 4-tap kernel (default)
//! - **Stucki**: 12 taps over 3 rows, the smoothest
//!
//! # Architecture
//!
//! There is a single scan loop, [`diffuse_with_kernel`]. An algorithm is
//! nothing but a [`Kernel`] table handed to that loop.
//!
//! # Example
//!
//! ```
//! use rgb565_dither::{apply_dithering, Argb, DitherAlgorithm, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::new(8, 8, Argb::opaque(100, 150, 200)).unwrap();
//! apply_dithering(&mut buffer, DitherAlgorithm::Stucki);
//! ```

mod kernel;
mod options;

pub use kernel::*;
pub use options::DitherOptions;

use std::fmt;
use std::str::FromStr;

use crate::buffer::PixelBuffer;
use crate::color::Argb;
use crate::quantize::quantize_pixel;

/// Dither algorithm selection.
///
/// Each variant names one of the built-in [`Kernel`] tables.
///
/// # Example
///
/// ```
/// use rgb565_dither::DitherAlgorithm;
///
/// let algorithm: DitherAlgorithm = "sierra-lite".parse().unwrap();
/// assert_eq!(algorithm, DitherAlgorithm::SierraLite);
/// assert_eq!(algorithm.kernel().divisor, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Sierra Lite (Sierra-2-4A), 3 taps, divisor 4.
    SierraLite,

    /// Two-row Sierra, 7 taps, divisor 16.
    Sierra2,

    /// Floyd-Steinberg, 4 taps, divisor 16.
    #[default]
    FloydSteinberg,

    /// Stucki, 12 taps over 3 rows, divisor 42.
    Stucki,
}

impl DitherAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [DitherAlgorithm; 4] = [
        DitherAlgorithm::SierraLite,
        DitherAlgorithm::Sierra2,
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Stucki,
    ];

    /// The weight table for this algorithm.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DitherAlgorithm::SierraLite => &SIERRA_LITE,
            DitherAlgorithm::Sierra2 => &SIERRA_2,
            DitherAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DitherAlgorithm::Stucki => &STUCKI,
        }
    }

    /// Stable lowercase identifier, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::SierraLite => "sierra-lite",
            DitherAlgorithm::Sierra2 => "sierra2",
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Stucki => "stucki",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            DitherAlgorithm::SierraLite => "Sierra Lite",
            DitherAlgorithm::Sierra2 => "Sierra-2",
            DitherAlgorithm::FloydSteinberg => "Floyd-Steinberg",
            DitherAlgorithm::Stucki => "Stucki",
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherAlgorithm {
    type Err = ParseAlgorithmError;

    /// Case-insensitive; `-`, `_` and spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "sierralite" | "sierra24a" | "lite" => Ok(DitherAlgorithm::SierraLite),
            "sierra2" | "sierratworow" | "tworowsierra" => Ok(DitherAlgorithm::Sierra2),
            "floydsteinberg" | "floyd" | "fs" => Ok(DitherAlgorithm::FloydSteinberg),
            "stucki" => Ok(DitherAlgorithm::Stucki),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dither algorithm '{}' (expected one of: sierra-lite, sierra2, floyd-steinberg, stucki)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Dither `buffer` in place to 5-6-5 with the given algorithm.
pub fn apply_dithering(buffer: &mut PixelBuffer, algorithm: DitherAlgorithm) {
    diffuse_with_kernel(buffer, algorithm.kernel(), &DitherOptions::default());
}

/// Dither `buffer` in place with explicit options.
pub fn apply_dithering_with(
    buffer: &mut PixelBuffer,
    algorithm: DitherAlgorithm,
    options: &DitherOptions,
) {
    diffuse_with_kernel(buffer, algorithm.kernel(), options);
}

/// Core error diffusion loop parameterized by kernel.
///
/// Visits pixels in raster order. For each pixel:
///
/// 1. quantize R, G and B to `options.depth` (alpha untouched) and store
///    the result, which is final from here on
/// 2. compute the signed per-channel error `original - quantized`
/// 3. for each kernel tap inside the buffer, add
///    `weight / divisor * error` to the target's channels, clamping to
///    `[0, 255]` and flooring (see [`diffuse_channel`])
///
/// Taps that fall outside the buffer are dropped. Error is diffused into
/// the buffer itself rather than a side table, so a neighbour's channels
/// are clamped after every contribution, not once at the end.
///
/// # Repeated passes
///
/// The pass overwrites the input; the original samples cannot be
/// recovered. Its output is a fixed point: every sample is already
/// representable, so running the pass again produces zero error
/// everywhere and changes nothing.
///
/// # Panics (debug only)
///
/// Debug-asserts that `kernel` is causal ([`Kernel::is_causal`]).
pub fn diffuse_with_kernel(buffer: &mut PixelBuffer, kernel: &Kernel, options: &DitherOptions) {
    debug_assert!(
        kernel.is_causal(),
        "kernel taps must point at pixels later in raster order"
    );

    let width = buffer.width();
    let height = buffer.height();
    let divisor = f64::from(kernel.divisor);

    for y in 0..height {
        for x in 0..width {
            let original = *buffer.pixel_mut(x, y);
            let quantized = quantize_pixel(original, options.depth);
            *buffer.pixel_mut(x, y) = quantized;

            let error = [
                i16::from(original.r) - i16::from(quantized.r),
                i16::from(original.g) - i16::from(quantized.g),
                i16::from(original.b) - i16::from(quantized.b),
            ];
            if error == [0, 0, 0] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let Some(nx) = x
                    .checked_add_signed(dx as isize)
                    .filter(|&nx| nx < width)
                else {
                    continue;
                };
                let Some(ny) = y
                    .checked_add_signed(dy as isize)
                    .filter(|&ny| ny < height)
                else {
                    continue;
                };

                let ratio = f64::from(weight) / divisor;
                let target = buffer.pixel_mut(nx, ny);
                *target = diffuse_pixel(*target, ratio, error);
            }
        }
    }
}

/// Add a weighted error triple to a sample's color channels.
#[inline]
fn diffuse_pixel(pixel: Argb, ratio: f64, error: [i16; 3]) -> Argb {
    let [r, g, b] = pixel.rgb();
    pixel.with_rgb([
        diffuse_channel(r, ratio, error[0]),
        diffuse_channel(g, ratio, error[1]),
        diffuse_channel(b, ratio, error[2]),
    ])
}

/// `current + ratio * error`, clamped to `[0, 255]`, floored.
///
/// `-0.3` becomes `0` via the clamp, `3.9` becomes `3`.
#[inline]
pub(crate) fn diffuse_channel(current: u8, ratio: f64, error: i16) -> u8 {
    let value = f64::from(current) + ratio * f64::from(error);
    if value < 0.0 {
        0
    } else if value > 255.0 {
        255
    } else {
        value.floor() as u8
    }
}
