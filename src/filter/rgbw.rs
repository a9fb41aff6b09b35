//! RGB to RGBW filter

use crate::color::{pack_rgbw, rgb_from_u32, rgb_to_rgbw};

use super::Filter;

/// Rewrites each pixel as corrected RGB plus a derived white channel
///
/// Pixels with no color (R = G = B = 0) are left untouched.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RgbwConversion;

impl Filter for RgbwConversion {
    fn apply(&self, pixels: &mut [u32]) {
        for pixel in pixels.iter_mut() {
            let color = rgb_from_u32(*pixel);
            if color.r == 0 && color.g == 0 && color.b == 0 {
                continue;
            }
            *pixel = pack_rgbw(rgb_to_rgbw(color));
        }
    }
}
