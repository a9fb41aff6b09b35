use crate::config::StripConfig;

mod gamma;
mod remap;
mod rgbw;

pub(crate) trait Filter {
    /// Apply the filter to a pixel sequence in place
    fn apply(&self, pixels: &mut [u32]);
}

use gamma::GammaCorrection;
pub use remap::IndexMapping;
use rgbw::RgbwConversion;

/// Filter processor - applies per-pixel transforms before encoding
///
/// Processing is applied in a specific order: white extraction, then gamma
/// correction of all four channels.
#[derive(Debug, Clone)]
pub(crate) struct FilterProcessor {
    /// RGB to RGBW conversion
    rgbw: Option<RgbwConversion>,
    /// Gamma correction
    gamma: Option<GammaCorrection>,
}

impl FilterProcessor {
    /// Create a filter processor for the given configuration
    pub(crate) fn new(config: &StripConfig) -> Self {
        let rgbw = config.rgb_to_rgbw.then_some(RgbwConversion);
        let gamma = config.gamma_correction.then(GammaCorrection::ws281x);
        Self { rgbw, gamma }
    }

    /// Apply all enabled filters to the pixels
    pub(crate) fn apply(&self, pixels: &mut [u32]) {
        if let Some(rgbw) = &self.rgbw {
            rgbw.apply(pixels);
        }
        if let Some(gamma) = &self.gamma {
            gamma.apply(pixels);
        }
    }
}
