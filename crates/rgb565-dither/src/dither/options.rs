//! Dithering options and configuration.

use crate::quantize::ChannelDepth;

/// Configuration options for error diffusion dithering.
///
/// # Defaults
///
/// - Channel depth: [`ChannelDepth::RGB565`]
///
/// # Example
///
/// ```
/// use rgb565_dither::{ChannelDepth, DitherOptions};
///
/// let options = DitherOptions::new().depth(ChannelDepth::RGB444);
/// assert_eq!(options.depth, ChannelDepth::RGB444);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DitherOptions {
    /// Target bit depth per color channel.
    ///
    /// Default: 5-6-5
    pub depth: ChannelDepth,
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target channel depth.
    #[inline]
    pub fn depth(mut self, depth: ChannelDepth) -> Self {
        self.depth = depth;
        self
    }
}
