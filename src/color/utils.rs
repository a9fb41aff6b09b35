//! Packed color word helpers
//!
//! Pixel words use the W:R:G:B layout, white in the most significant byte.

use crate::color::{Rgb, Rgbw, White};

/// Create an RGB color from a u32 value (0x__RRGGBB format)
///
/// The white byte, if any, is ignored.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Split a W:R:G:B word into its channels
pub const fn unpack_rgbw(color: u32) -> Rgbw {
    Rgbw {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
        a: White((color >> 24) as u8),
    }
}

/// Pack channels back into a W:R:G:B word
#[allow(clippy::cast_lossless)]
pub const fn pack_rgbw(color: Rgbw) -> u32 {
    (color.a.0 as u32) << 24 | (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
}
