//! PNG decoding into, and encoding out of, a [`PixelBuffer`].
//!
//! Any PNG color type and bit depth is normalized to 8-bit RGBA on the way
//! in. Output is always 8-bit RGBA so alpha survives the round trip.

use std::io::Cursor;

use rgb565_dither::PixelBuffer;

use crate::error::ImageError;

/// Decode a PNG into a pixel buffer.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    // Palette and low bit depths expand to 8 bits, tRNS becomes an alpha
    // channel, 16-bit samples keep their high byte.
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let rgba = to_rgba8(info.color_type, data)?;
    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );
    Ok(PixelBuffer::from_rgba_bytes(
        info.width as usize,
        info.height as usize,
        &rgba,
    )?)
}

/// Encode a pixel buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
    let too_large = || ImageError::TooLarge {
        width: buffer.width(),
        height: buffer.height(),
    };
    let width = u32::try_from(buffer.width()).map_err(|_| too_large())?;
    let height = u32::try_from(buffer.height()).map_err(|_| too_large())?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&buffer.to_rgba_bytes())?;
    }
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng. Falls back to the input on failure.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let before = png_bytes.len();
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(before, after = optimized.len(), "Optimized PNG");
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping original encoding");
            png_bytes
        }
    }
}

/// Convert decoder output (8-bit, not indexed) to RGBA bytes.
fn to_rgba8(color_type: png::ColorType, data: &[u8]) -> Result<Vec<u8>, ImageError> {
    let rgba = match color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => return Err(ImageError::UnsupportedColorType(other)),
    };
    Ok(rgba)
}
