//! Pixel buffer and its validation errors
//!
//! [`PixelBuffer`] is the only thing the engine touches. It is created and
//! owned by the caller; a dithering pass borrows it mutably and hands it
//! back with the same dimensions and new sample values.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
