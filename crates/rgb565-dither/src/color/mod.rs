//! Color sample type
//!
//! The only color representation the engine needs is a plain 8-bit ARGB
//! sample. No color-space conversion happens anywhere in this crate: the
//! channels are treated as linear integers in `0..=255`.
//!
//! # Example
//!
//! ```
//! use rgb565_dither::Argb;
//!
//! let px = Argb::from_u32(0xFF80_4020);
//! assert_eq!((px.a, px.r, px.g, px.b), (0xFF, 0x80, 0x40, 0x20));
//! assert_eq!(px.to_u32(), 0xFF80_4020);
//! ```

mod argb;

pub use argb::Argb;
