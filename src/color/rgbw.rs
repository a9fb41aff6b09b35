//! RGB to RGBW conversion
//!
//! Extracts the largest white component that keeps hue and saturation,
//! leaving the remainder in the RGB channels.

use crate::color::{Rgb, Rgbw, White};

/// Derive a white channel from an RGB color
///
/// Black stays black. The arithmetic runs in `f64` and truncates toward zero,
/// so some grays keep a residual of 1 in each color channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_rgbw(color: Rgb) -> Rgbw {
    let max = color.r.max(color.g).max(color.b);
    if max == 0 {
        return Rgbw {
            r: 0,
            g: 0,
            b: 0,
            a: White(0),
        };
    }

    let multiplier = 255.0 / f64::from(max);
    let r_hue = f64::from(color.r) * multiplier;
    let g_hue = f64::from(color.g) * multiplier;
    let b_hue = f64::from(color.b) * multiplier;

    let max_hue = r_hue.max(g_hue).max(b_hue);
    let min_hue = r_hue.min(g_hue).min(b_hue);
    let whiteness = (((max_hue + min_hue) / 2.0 - 127.5) * 2.0 / multiplier) as u8;

    Rgbw {
        r: color.r.saturating_sub(whiteness),
        g: color.g.saturating_sub(whiteness),
        b: color.b.saturating_sub(whiteness),
        a: White(whiteness),
    }
}
