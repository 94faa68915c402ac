//! 8-bit ARGB sample

/// One pixel: four independent 8-bit channels.
///
/// Alpha is carried through every operation in this crate unchanged; only
/// red, green and blue are quantized and receive diffused error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb {
    /// Alpha channel (never modified by dithering)
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self::new(255, 0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a sample from its four channels.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque sample.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Unpack a `0xAARRGGBB` word.
    #[inline]
    pub const fn from_u32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` word.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Build from `[r, g, b, a]` bytes (PNG / canvas byte order).
    #[inline]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[3], rgba[0], rgba[1], rgba[2])
    }

    /// Return `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color channels as an array, in `[r, g, b]` order.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same alpha, new color channels.
    #[inline]
    pub const fn with_rgb(self, rgb: [u8; 3]) -> Self {
        Self::new(self.a, rgb[0], rgb[1], rgb[2])
    }
}
