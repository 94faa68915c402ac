//! Test images and scratch files.

use std::path::{Path, PathBuf};

use dithering::rendering::encode_png;
use rgb565_dither::{Argb, PixelBuffer};

/// Smooth diagonal RGB ramp; almost no pixel is representable in 5-6-5.
pub fn ramp(width: usize, height: usize) -> PixelBuffer {
    let span = |n: usize| n.saturating_sub(1).max(1);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / span(width)) as u8;
            let g = (y * 255 / span(height)) as u8;
            let b = ((x + y) * 3 % 256) as u8;
            pixels.push(Argb::opaque(r, g, b));
        }
    }
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// Ramp with a varying alpha channel.
pub fn translucent_ramp(width: usize, height: usize) -> PixelBuffer {
    let pixels = ramp(width, height)
        .pixels()
        .iter()
        .enumerate()
        .map(|(i, p)| Argb { a: (i * 37 % 256) as u8, ..*p })
        .collect();
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// Encode `buffer` and write it to `dir/name`.
pub fn write_png(dir: &Path, name: &str, buffer: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(buffer).unwrap()).unwrap();
    path
}

/// Write a YAML config file to `dir/config.yaml`.
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}
