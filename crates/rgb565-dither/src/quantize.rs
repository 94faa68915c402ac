//! Fixed channel-depth quantizer.
//!
//! Maps an 8-bit channel value to the nearest value representable at a
//! reduced bit depth, then back to the 8-bit range:
//!
//! ```text
//! max   = 2^bits - 1
//! level = round(v * max / 255)       (nearest level)
//! q     = level * 255 / max          (integer division, truncates)
//! ```
//!
//! `v * max / 255` can never land exactly on `.5`: that would need
//! `2 * v * max == 255 * (2k + 1)`, an even number equal to an odd one.
//! So the rounding mode never matters and the forward step is computed
//! exactly in integers as `(2 * v * max + 255) / 510`.

use std::fmt;
use std::str::FromStr;

use crate::color::Argb;

/// Per-channel bit depths of the target color space.
///
/// Each depth is in `1..=8`. The default is [`ChannelDepth::RGB565`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelDepth {
    r: u8,
    g: u8,
    b: u8,
}

impl ChannelDepth {
    /// 16-bit color: 5 bits red, 6 bits green, 5 bits blue.
    pub const RGB565: Self = Self { r: 5, g: 6, b: 5 };

    /// 15-bit color: 5 bits per channel.
    pub const RGB555: Self = Self { r: 5, g: 5, b: 5 };

    /// 12-bit color: 4 bits per channel.
    pub const RGB444: Self = Self { r: 4, g: 4, b: 4 };

    /// Create a depth triple.
    ///
    /// # Errors
    ///
    /// [`DepthError::OutOfRange`] if any depth is outside `1..=8`.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, DepthError> {
        for bits in [r, g, b] {
            if !(1..=8).contains(&bits) {
                return Err(DepthError::OutOfRange(bits));
            }
        }
        Ok(Self { r, g, b })
    }

    /// Red depth in bits.
    #[inline]
    pub fn red(&self) -> u8 {
        self.r
    }

    /// Green depth in bits.
    #[inline]
    pub fn green(&self) -> u8 {
        self.g
    }

    /// Blue depth in bits.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Depths in `[r, g, b]` order.
    #[inline]
    pub fn bits(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for ChannelDepth {
    fn default() -> Self {
        Self::RGB565
    }
}

impl fmt::Display for ChannelDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.r, self.g, self.b)
    }
}

impl FromStr for ChannelDepth {
    type Err = DepthError;

    /// Parse three digits, e.g. `"565"` or `"444"`, optionally prefixed
    /// with `rgb` in any case (`"rgb565"`, `"RGB565"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized.strip_prefix("rgb").unwrap_or(&normalized);
        let bits: Vec<u8> = digits
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(|| DepthError::Invalid(s.to_string()))?;
        match bits.as_slice() {
            &[r, g, b] => Self::new(r, g, b),
            _ => Err(DepthError::Invalid(s.to_string())),
        }
    }
}

/// Error returned for an unusable channel depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepthError {
    /// A depth outside `1..=8` bits
    OutOfRange(u8),
    /// A string that is not three depth digits
    Invalid(String),
}

impl fmt::Display for DepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthError::OutOfRange(bits) => {
                write!(f, "channel depth must be 1-8 bits, got {}", bits)
            }
            DepthError::Invalid(s) => {
                write!(f, "invalid channel depth '{}' (expected e.g. 565)", s)
            }
        }
    }
}

impl std::error::Error for DepthError {}

/// Quantize one 8-bit channel value to `bits` of precision.
///
/// Returns the 8-bit value of the nearest representable level.
/// `bits` must be in `1..=8`.
///
/// ```
/// use rgb565_dither::quantize_channel;
///
/// assert_eq!(quantize_channel(128, 5), 131);
/// assert_eq!(quantize_channel(128, 6), 129);
/// assert_eq!(quantize_channel(255, 5), 255);
/// ```
#[inline]
pub fn quantize_channel(value: u8, bits: u8) -> u8 {
    debug_assert!((1..=8).contains(&bits), "bits must be 1-8");
    let max = (1u32 << bits) - 1;
    let level = (2 * value as u32 * max + 255) / 510;
    (level * 255 / max) as u8
}

/// Quantize the color channels of a sample, leaving alpha untouched.
#[inline]
pub fn quantize_pixel(pixel: Argb, depth: ChannelDepth) -> Argb {
    Argb::new(
        pixel.a,
        quantize_channel(pixel.r, depth.r),
        quantize_channel(pixel.g, depth.g),
        quantize_channel(pixel.b, depth.b),
    )
}
