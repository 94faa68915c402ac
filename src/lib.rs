//! Dithering - reduce PNG images to 16-bit color with error diffusion.
//!
//! The dithering engine lives in the `rgb565-dither` crate; this crate
//! wraps it with PNG decoding/encoding, demo images, configuration and a
//! CLI. The library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
