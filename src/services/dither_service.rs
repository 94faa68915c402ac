use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rgb565_dither::{apply_dithering_with, ChannelDepth, DitherAlgorithm, DitherOptions, PixelBuffer};

use crate::error::ImageError;
use crate::models::AppConfig;
use crate::rendering::patterns::{self, DemoPattern};
use crate::rendering::{decode_png, encode_png, optimize_png};

/// Settings applied to every image the service processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DitherSettings {
    pub algorithm: DitherAlgorithm,
    pub depth: ChannelDepth,
    /// Re-compress output PNGs with oxipng
    pub optimize: bool,
}

impl From<&AppConfig> for DitherSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            depth: config.depth,
            optimize: config.optimize,
        }
    }
}

/// Summary of one dithered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitherReport {
    pub width: usize,
    pub height: usize,
    /// Pixels whose color differs from the input
    pub changed_pixels: usize,
    /// Size of the written PNG
    pub bytes: usize,
}

/// Decode, dither and re-encode PNG images.
pub struct DitherService {
    settings: DitherSettings,
}

impl DitherService {
    pub fn new(settings: DitherSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> DitherSettings {
        self.settings
    }

    /// Dither a buffer in place with the configured algorithm.
    pub fn dither_buffer(&self, buffer: &mut PixelBuffer) {
        self.dither_buffer_with(buffer, self.settings.algorithm);
    }

    fn dither_buffer_with(&self, buffer: &mut PixelBuffer, algorithm: DitherAlgorithm) {
        let start = Instant::now();
        let options = DitherOptions::new().depth(self.settings.depth);
        apply_dithering_with(buffer, algorithm, &options);
        tracing::debug!(
            algorithm = algorithm.name(),
            depth = %self.settings.depth,
            width = buffer.width(),
            height = buffer.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Dithered buffer"
        );
    }

    /// PNG bytes in, dithered PNG bytes out.
    pub fn dither_png(&self, png_bytes: &[u8]) -> Result<Vec<u8>, ImageError> {
        let mut buffer = decode_png(png_bytes)?;
        self.dither_buffer(&mut buffer);
        self.encode(&buffer)
    }

    /// Dither the PNG at `input` and write the result to `output`.
    pub fn dither_file(&self, input: &Path, output: &Path) -> Result<DitherReport, ImageError> {
        let start = Instant::now();
        let data = fs::read(input).map_err(|e| ImageError::io(input, e))?;
        let original = decode_png(&data)?;

        let mut buffer = original.clone();
        self.dither_buffer(&mut buffer);
        let changed_pixels = count_changed(&original, &buffer);

        let png = self.encode(&buffer)?;
        fs::write(output, &png).map_err(|e| ImageError::io(output, e))?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            algorithm = self.settings.algorithm.name(),
            changed_pixels,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Dithered image"
        );
        Ok(DitherReport {
            width: buffer.width(),
            height: buffer.height(),
            changed_pixels,
            bytes: png.len(),
        })
    }

    /// Write `<pattern>-original.png` and one `<pattern>-<algorithm>.png`
    /// per algorithm into `out_dir`. Each algorithm dithers its own fresh
    /// copy of the pattern.
    pub fn render_demo(
        &self,
        pattern: DemoPattern,
        width: usize,
        height: usize,
        algorithms: &[DitherAlgorithm],
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, ImageError> {
        fs::create_dir_all(out_dir).map_err(|e| ImageError::io(out_dir, e))?;
        let source = patterns::generate(pattern, width, height)?;

        let mut written = Vec::with_capacity(algorithms.len() + 1);
        let path = out_dir.join(format!("{}-original.png", pattern.name()));
        self.write_png(&path, &source)?;
        written.push(path);

        for &algorithm in algorithms {
            let mut buffer = source.clone();
            self.dither_buffer_with(&mut buffer, algorithm);
            let path = out_dir.join(format!("{}-{}.png", pattern.name(), algorithm.name()));
            self.write_png(&path, &buffer)?;
            written.push(path);
        }

        tracing::info!(
            pattern = pattern.name(),
            dir = %out_dir.display(),
            files = written.len(),
            "Demo images written"
        );
        Ok(written)
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
        let png = encode_png(buffer)?;
        Ok(if self.settings.optimize {
            optimize_png(png)
        } else {
            png
        })
    }

    fn write_png(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), ImageError> {
        let png = self.encode(buffer)?;
        fs::write(path, png).map_err(|e| ImageError::io(path, e))
    }
}

fn count_changed(before: &PixelBuffer, after: &PixelBuffer) -> usize {
    before
        .pixels()
        .iter()
        .zip(after.pixels())
        .filter(|(a, b)| a != b)
        .count()
}
