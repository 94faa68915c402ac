//! Assertion helpers for tests.

use std::path::Path;

use dithering::rendering::decode_png;
use pretty_assertions::assert_eq;
use rgb565_dither::{quantize_pixel, ChannelDepth, PixelBuffer};

use super::cli::CliOutput;

/// Assert the command exited successfully
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.status.success(),
        "Expected success, got {:?}.\nstdout: {}\nstderr: {}",
        output.status,
        output.stdout,
        output.stderr
    );
}

/// Assert the command failed
pub fn assert_failure(output: &CliOutput) {
    assert!(
        !output.status.success(),
        "Expected failure.\nstdout: {}\nstderr: {}",
        output.stdout,
        output.stderr
    );
}

/// Decode the PNG at `path`, failing the test with the path on error
pub fn read_png(path: &Path) -> PixelBuffer {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature in {}",
        path.display()
    );
    decode_png(&bytes).unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
}

/// Assert every pixel is exactly representable at `depth`
pub fn assert_representable(buffer: &PixelBuffer, depth: ChannelDepth) {
    for (i, &p) in buffer.pixels().iter().enumerate() {
        assert_eq!(
            quantize_pixel(p, depth),
            p,
            "pixel {i} is not on the {depth} grid"
        );
    }
}
