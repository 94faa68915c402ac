//! Domain-critical regression tests for rgb565-dither.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::buffer::PixelBuffer;
    use crate::color::Argb;
    use crate::dither::{
        apply_dithering, apply_dithering_with, diffuse_with_kernel, DitherAlgorithm, DitherOptions,
    };
    use crate::quantize::{quantize_channel, quantize_pixel, ChannelDepth};

    /// A 16x16 image that exercises every channel, alpha included.
    fn varied_image() -> PixelBuffer {
        let size = 16;
        let pixels = (0..size * size)
            .map(|i| {
                Argb::new(
                    (i * 13 % 256) as u8,
                    (i % 256) as u8,
                    (i * 3 % 256) as u8,
                    (i * 7 % 256) as u8,
                )
            })
            .collect();
        PixelBuffer::from_pixels(size, size, pixels).unwrap()
    }

    // ========================================================================
    // Quantizer
    // ========================================================================

    /// If this breaks, it means: quantized values are no longer fixed points
    /// of the quantizer, so the same pixel could be pushed to a different
    /// level each time it is looked at.
    #[test]
    fn test_quantize_idempotent() {
        for bits in [5, 6] {
            for v in 0..=255u8 {
                let q = quantize_channel(v, bits);
                assert_eq!(
                    quantize_channel(q, bits),
                    q,
                    "REGRESSION: quantize({}) = {} is not stable at {} bits",
                    v,
                    q,
                    bits
                );
            }
        }
    }

    // ========================================================================
    // Kernels
    // ========================================================================

    /// If this breaks, it means: a kernel gains or loses energy, which shows
    /// up as images drifting darker or lighter than the source.
    #[test]
    fn test_kernel_weights_sum_to_one() {
        for algorithm in DitherAlgorithm::ALL {
            let kernel = algorithm.kernel();
            assert_eq!(
                kernel.weight_sum(),
                u32::from(kernel.divisor),
                "REGRESSION: {} weights sum to {}/{}",
                algorithm,
                kernel.weight_sum(),
                kernel.divisor
            );
        }
    }

    // ========================================================================
    // Boundary handling
    // ========================================================================

    /// If this breaks, it means: edge taps are wrapped or written out of
    /// bounds instead of being dropped.
    #[test]
    fn test_single_pixel_only_quantizes() {
        let samples = [
            Argb::new(255, 128, 128, 128),
            Argb::new(0, 1, 2, 3),
            Argb::new(90, 250, 5, 127),
            Argb::WHITE,
        ];
        for algorithm in DitherAlgorithm::ALL {
            for px in samples {
                let mut buffer = PixelBuffer::new(1, 1, px).unwrap();
                apply_dithering(&mut buffer, algorithm);
                assert_eq!(
                    buffer.pixels(),
                    &[quantize_pixel(px, ChannelDepth::RGB565)],
                    "REGRESSION: {} on a 1x1 buffer did more than quantize {:?}",
                    algorithm,
                    px
                );
            }
        }
    }

    /// If this breaks, it means: taps on the right/left/bottom edge are not
    /// clipped and a narrow buffer panics or wraps error into the next row.
    #[test]
    fn test_narrow_buffers_do_not_wrap() {
        for algorithm in DitherAlgorithm::ALL {
            for (w, h) in [(1, 5), (5, 1), (2, 2), (2, 3)] {
                let mut buffer = PixelBuffer::new(w, h, Argb::opaque(4, 4, 4)).unwrap();
                apply_dithering(&mut buffer, algorithm);
                assert_eq!(buffer.width(), w);
                assert_eq!(buffer.height(), h);
            }
        }

        // Single row with Sierra Lite: the only right tap wraps nowhere.
        // R=4 -> 0 (err 4), next gets 4 + 2/4*4 = 6 -> 8 (err -2),
        // last gets 4 + 2/4*-2 = 3 -> 0.
        let mut row = PixelBuffer::new(3, 1, Argb::opaque(4, 0, 0)).unwrap();
        apply_dithering(&mut row, DitherAlgorithm::SierraLite);
        let reds: Vec<u8> = row.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![0, 8, 0]);
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// If this breaks, it means: pixels are quantized independently (no
    /// diffusion) or out of raster order.
    #[test]
    fn test_output_depends_on_earlier_pixels() {
        let mut row = PixelBuffer::new(3, 1, Argb::opaque(4, 0, 0)).unwrap();
        let independent: Vec<Argb> = row
            .pixels()
            .iter()
            .map(|&p| quantize_pixel(p, ChannelDepth::RGB565))
            .collect();
        apply_dithering(&mut row, DitherAlgorithm::SierraLite);
        assert_ne!(
            row.pixels(),
            independent.as_slice(),
            "REGRESSION: dithering produced the same result as plain quantization"
        );
    }

    /// If this breaks, it means: the pass leaves non-representable samples
    /// behind, or keeps hidden error state between calls.
    #[test]
    fn test_second_pass_is_stable() {
        for algorithm in DitherAlgorithm::ALL {
            let original = varied_image();
            let mut once = original.clone();
            apply_dithering(&mut once, algorithm);
            assert_ne!(once, original, "{} did not change the image", algorithm);

            let mut twice = once.clone();
            apply_dithering(&mut twice, algorithm);
            assert_eq!(
                twice, once,
                "REGRESSION: second {} pass moved already dithered pixels",
                algorithm
            );
        }
    }

    // ========================================================================
    // Channels
    // ========================================================================

    /// If this breaks, it means: error from one channel leaks into another.
    #[test]
    fn test_pure_red_stays_pure_red() {
        let pixels = (0..64u32)
            .map(|i| Argb::opaque((i * 4 + 1) as u8, 0, 0))
            .collect();
        let original = PixelBuffer::from_pixels(8, 8, pixels).unwrap();
        for algorithm in DitherAlgorithm::ALL {
            let mut buffer = original.clone();
            apply_dithering(&mut buffer, algorithm);
            assert!(
                buffer.pixels().iter().all(|p| p.g == 0 && p.b == 0),
                "REGRESSION: {} leaked red error into green or blue",
                algorithm
            );
        }
    }

    /// If this breaks, it means: alpha is being quantized or diffused.
    #[test]
    fn test_alpha_preserved() {
        let original = varied_image();
        for algorithm in DitherAlgorithm::ALL {
            for depth in [ChannelDepth::RGB565, ChannelDepth::RGB444] {
                let mut buffer = original.clone();
                diffuse_with_kernel(
                    &mut buffer,
                    algorithm.kernel(),
                    &DitherOptions::new().depth(depth),
                );
                for (before, after) in original.pixels().iter().zip(buffer.pixels()) {
                    assert_eq!(
                        before.a, after.a,
                        "REGRESSION: {} at depth {} changed alpha",
                        algorithm, depth
                    );
                }
            }
        }
    }

    // ========================================================================
    // Reference output
    // ========================================================================

    /// If this breaks, it means: quantization rounding or the clamp/floor
    /// rule changed. The expected values are worked by hand:
    ///
    /// - R = 128 at 5 bits: round(128 * 31 / 255) = 16, 16 * 255 / 31 = 131
    /// - G = 128 at 6 bits: round(128 * 63 / 255) = 32, 32 * 255 / 63 = 129
    /// - errors (-3, -1, -3), 7/16 of them pushed right onto 0 -> clamp to 0
    #[test]
    fn test_floyd_steinberg_two_pixel_reference() {
        let mut buffer = PixelBuffer::from_pixels(
            2,
            1,
            vec![Argb::new(255, 128, 128, 128), Argb::new(255, 0, 0, 0)],
        )
        .unwrap();
        apply_dithering(&mut buffer, DitherAlgorithm::FloydSteinberg);
        assert_eq!(buffer.get(0, 0), Some(Argb::new(255, 131, 129, 131)));
        assert_eq!(buffer.get(1, 0), Some(Argb::new(255, 0, 0, 0)));
    }

    /// If this breaks, it means: diffused values are rounded instead of
    /// floored. Green 128 -> 129 leaves error -1; the right neighbour's
    /// green becomes 3 - 7/16 = 2.5625. Floored that is 2, which quantizes
    /// to 0 at 6 bits; rounded it would be 3, which quantizes to 4.
    #[test]
    fn test_diffusion_floors_instead_of_rounding() {
        let mut buffer = PixelBuffer::from_pixels(
            2,
            1,
            vec![Argb::new(255, 128, 128, 128), Argb::new(255, 5, 3, 5)],
        )
        .unwrap();
        apply_dithering(&mut buffer, DitherAlgorithm::FloydSteinberg);
        assert_eq!(buffer.get(1, 0).map(|p| p.g), Some(0));
    }

    // ========================================================================
    // Golden output
    // ========================================================================

    type Rows = [[[u8; 3]; 6]; 4];

    /// 6x4 RGB source for the golden tests. Four rows give Stucki's third
    /// row somewhere to land.
    const GOLDEN_SOURCE: Rows = [
        [[205, 181, 124], [223, 195, 221], [108, 176, 124], [82, 158, 50], [114, 16, 27], [30, 247, 232]],
        [[188, 191, 127], [40, 64, 222], [18, 231, 25], [178, 220, 13], [54, 172, 7], [166, 40, 87]],
        [[213, 219, 64], [36, 242, 174], [117, 177, 50], [206, 202, 241], [181, 189, 45], [170, 18, 68]],
        [[31, 106, 0], [124, 134, 229], [235, 71, 17], [235, 87, 151], [127, 215, 221], [233, 118, 101]],
    ];

    fn golden_buffer() -> PixelBuffer {
        let pixels = GOLDEN_SOURCE
            .iter()
            .flatten()
            .map(|&[r, g, b]| Argb::opaque(r, g, b))
            .collect();
        PixelBuffer::from_pixels(6, 4, pixels).unwrap()
    }

    fn assert_golden(algorithm: DitherAlgorithm, depth: ChannelDepth, expected: &Rows) {
        let mut buffer = golden_buffer();
        apply_dithering_with(&mut buffer, algorithm, &DitherOptions::new().depth(depth));
        for (y, row) in expected.iter().enumerate() {
            for (x, &[r, g, b]) in row.iter().enumerate() {
                assert_eq!(
                    buffer.get(x, y),
                    Some(Argb::opaque(r, g, b)),
                    "REGRESSION: {} at depth {} differs at ({}, {})",
                    algorithm,
                    depth,
                    x,
                    y
                );
            }
        }
    }

    /// Two bits per channel (levels 0, 85, 170, 255). Errors reach +-42,
    /// so `weight / divisor * error` is large enough for every tap weight
    /// to move some pixel across a level. At 5-6-5 the error is at most 4
    /// and most contributions only shift a value by their sign.
    fn coarse() -> ChannelDepth {
        ChannelDepth::new(2, 2, 2).unwrap()
    }

    /// If this breaks, it means: a Sierra Lite tap moved or changed weight.
    #[test]
    fn test_sierra_lite_golden() {
        assert_golden(
            DitherAlgorithm::SierraLite,
            coarse(),
            &[
                [[170, 170, 85], [255, 170, 255], [85, 170, 85], [85, 170, 85], [85, 0, 0], [85, 255, 255]],
                [[170, 170, 170], [85, 85, 170], [0, 255, 85], [170, 255, 0], [85, 170, 0], [170, 0, 85]],
                [[170, 255, 85], [85, 255, 170], [85, 170, 0], [170, 170, 255], [170, 170, 85], [170, 0, 85]],
                [[0, 85, 0], [170, 85, 255], [255, 85, 0], [255, 85, 170], [85, 255, 170], [255, 85, 85]],
            ],
        );
    }

    /// If this breaks, it means: a Sierra-2 tap moved or changed weight.
    /// Swapping any two of its weights changes at least one pixel here.
    #[test]
    fn test_sierra_2_golden() {
        assert_golden(
            DitherAlgorithm::Sierra2,
            coarse(),
            &[
                [[170, 170, 85], [255, 170, 255], [85, 170, 85], [85, 170, 85], [85, 0, 0], [0, 255, 255]],
                [[170, 170, 170], [85, 85, 255], [0, 255, 0], [170, 255, 0], [85, 170, 0], [170, 0, 85]],
                [[255, 255, 85], [0, 255, 170], [85, 170, 0], [255, 170, 255], [170, 170, 85], [170, 0, 85]],
                [[0, 85, 0], [85, 85, 255], [255, 85, 0], [255, 85, 170], [85, 255, 170], [255, 85, 85]],
            ],
        );
    }

    /// If this breaks, it means: a Floyd-Steinberg tap moved or changed
    /// weight.
    #[test]
    fn test_floyd_steinberg_golden() {
        assert_golden(
            DitherAlgorithm::FloydSteinberg,
            coarse(),
            &[
                [[170, 170, 85], [255, 170, 255], [85, 170, 85], [85, 170, 85], [85, 0, 0], [85, 255, 255]],
                [[170, 170, 170], [85, 85, 170], [0, 255, 85], [170, 255, 0], [85, 170, 0], [170, 0, 85]],
                [[255, 255, 85], [0, 255, 170], [85, 170, 0], [255, 170, 255], [170, 170, 85], [170, 0, 85]],
                [[0, 85, 0], [170, 85, 255], [255, 85, 0], [170, 85, 170], [170, 255, 170], [170, 85, 85]],
            ],
        );
    }

    /// If this breaks, it means: a Stucki tap moved or changed weight.
    #[test]
    fn test_stucki_golden() {
        assert_golden(
            DitherAlgorithm::Stucki,
            coarse(),
            &[
                [[170, 170, 85], [255, 170, 255], [85, 170, 85], [85, 170, 85], [85, 0, 0], [0, 255, 255]],
                [[170, 170, 170], [85, 85, 170], [0, 255, 0], [170, 255, 0], [85, 170, 0], [170, 0, 85]],
                [[255, 255, 85], [0, 255, 170], [85, 170, 85], [170, 170, 255], [170, 170, 0], [170, 0, 85]],
                [[0, 85, 0], [170, 85, 255], [255, 85, 0], [255, 85, 170], [85, 170, 255], [255, 170, 85]],
            ],
        );
    }

    /// If this breaks, it means: multi-row diffusion at 5-6-5 no longer
    /// matches existing renderings. Stucki reaches two rows down, so this
    /// also pins the clipping of its outer taps.
    #[test]
    fn test_stucki_golden_rgb565() {
        assert_golden(
            DitherAlgorithm::Stucki,
            ChannelDepth::RGB565,
            &[
                [[205, 182, 123], [222, 194, 222], [106, 174, 123], [82, 157, 49], [115, 16, 24], [32, 246, 230]],
                [[189, 190, 123], [41, 64, 222], [16, 230, 24], [172, 218, 8], [49, 170, 8], [164, 40, 82]],
                [[213, 214, 57], [32, 238, 172], [115, 174, 41], [197, 198, 238], [180, 186, 41], [164, 16, 65]],
                [[24, 105, 0], [115, 129, 222], [230, 68, 8], [230, 85, 148], [123, 214, 213], [230, 117, 98]],
            ],
        );
    }
}
