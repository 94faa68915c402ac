//! Error diffusion kernel definitions.
//!
//! Each kernel is a fixed table of taps: an offset `(dx, dy)` from the
//! pixel being processed and the numerator of the share of quantization
//! error it receives. All shares of one kernel have the same divisor.

/// An error diffusion kernel.
///
/// # Causality
///
/// The engine scans in raster order, so a tap may only point at pixels
/// that have not been visited yet: `dy > 0`, or `dy == 0` with `dx > 0`.
/// [`Kernel::is_causal`] checks this; all built-in kernels satisfy it.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Every built-in
/// kernel propagates exactly 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (positive = below)
    /// - `weight`: numerator of the error share
    pub entries: &'static [(i32, i32, u8)],

    /// Denominator shared by all weights.
    pub divisor: u8,
}

impl Kernel {
    /// Sum of all weight numerators.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum()
    }

    /// Whether every tap points at a pixel later in raster order.
    pub fn is_causal(&self) -> bool {
        self.entries
            .iter()
            .all(|&(dx, dy, _)| dy > 0 || (dy == 0 && dx > 0))
    }
}

/// Sierra Lite dithering kernel (also known as Sierra-2-4A).
///
/// Distributes error to 3 neighbors with 100% propagation (4/4).
///
/// ```text
///        X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[
        (1, 0, 2),  // right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
    ],
    divisor: 4,
};

/// Sierra-2 (two-row Sierra) dithering kernel.
///
/// Distributes error to 7 neighbors over 2 rows with 100% propagation (16/16).
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const SIERRA_2: Kernel = Kernel {
    entries: &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Stucki dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation (42/42).
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};
