//! Synthetic test images for `dithering demo`.
//!
//! Each pattern is a smooth, fully opaque gradient. Smooth gradients are where
//! banding from plain quantization is most visible, so they make the
//! difference between the kernels easy to see.

use rgb565_dither::{Argb, BufferError, PixelBuffer};
use serde::Deserialize;

/// Built-in demo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoPattern {
    /// Hue sweep left to right, darkening toward the bottom
    #[default]
    Rainbow,
    /// Concentric rings with soft edges
    Circles,
    /// Gray ramp on top, color ramps below
    Gradient,
}

impl DemoPattern {
    pub const ALL: [DemoPattern; 3] = [
        DemoPattern::Rainbow,
        DemoPattern::Circles,
        DemoPattern::Gradient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoPattern::Rainbow => "rainbow",
            DemoPattern::Circles => "circles",
            DemoPattern::Gradient => "gradient",
        }
    }
}

/// Render `pattern` at the given size.
pub fn generate(pattern: DemoPattern, width: usize, height: usize) -> Result<PixelBuffer, BufferError> {
    let mut buffer = PixelBuffer::new(width, height, Argb::BLACK)?;
    let shader: fn(f64, f64) -> [f64; 3] = match pattern {
        DemoPattern::Rainbow => rainbow,
        DemoPattern::Circles => circles,
        DemoPattern::Gradient => gradient,
    };

    for y in 0..height {
        for x in 0..width {
            // Sample at pixel centers in [0, 1].
            let u = (x as f64 + 0.5) / width as f64;
            let v = (y as f64 + 0.5) / height as f64;
            let [r, g, b] = shader(u, v);
            buffer.set(x, y, Argb::opaque(to_u8(r), to_u8(g), to_u8(b)))?;
        }
    }
    Ok(buffer)
}

fn to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn rainbow(u: f64, v: f64) -> [f64; 3] {
    let value = 1.0 - 0.85 * v;
    hsv_to_rgb(u * 360.0, 1.0, value)
}

fn circles(u: f64, v: f64) -> [f64; 3] {
    let (dx, dy) = (u - 0.5, v - 0.5);
    let d = (dx * dx + dy * dy).sqrt();
    let ring = 0.5 + 0.5 * (d * std::f64::consts::TAU * 6.0).cos();
    let hue = (d * 540.0) % 360.0;
    let [r, g, b] = hsv_to_rgb(hue, 0.6, 1.0);
    [r * ring, g * ring, b * ring]
}

fn gradient(u: f64, v: f64) -> [f64; 3] {
    // Four horizontal bands: gray, red, green, blue.
    match (v * 4.0) as u32 {
        0 => [u, u, u],
        1 => [u, 0.0, 0.0],
        2 => [0.0, u, 0.0],
        _ => [0.0, 0.0, u],
    }
}

/// Hue in degrees, saturation and value in [0, 1].
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let c = v * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    [r + m, g + m, b + m]
}
