//! Gamma correction for WS281x LEDs
//!
//! LED brightness is perceived non-linearly, so channel values are remapped
//! through a precomputed curve before transmission.

/// Exponent of the WS281x gamma curve
pub const WS281X_GAMMA: f64 = 1.0 / 0.45;

/// Lookup table for the WS281x curve, `floor((i / 255) ^ WS281X_GAMMA * 255 + 0.5)`
const WS281X_LUT: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6,
    6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 11, 11, 11,
    12, 12, 13, 13, 14, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19,
    19, 20, 20, 21, 22, 22, 23, 23, 24, 25, 25, 26, 26, 27, 28, 28,
    29, 30, 30, 31, 32, 33, 33, 34, 35, 35, 36, 37, 38, 39, 39, 40,
    41, 42, 43, 43, 44, 45, 46, 47, 48, 49, 50, 50, 51, 52, 53, 54,
    55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 71,
    72, 73, 74, 75, 76, 77, 78, 80, 81, 82, 83, 84, 86, 87, 88, 89,
    91, 92, 93, 94, 96, 97, 98, 100, 101, 102, 104, 105, 106, 108, 109, 110,
    112, 113, 115, 116, 118, 119, 121, 122, 123, 125, 126, 128, 130, 131, 133, 134,
    136, 137, 139, 140, 142, 144, 145, 147, 149, 150, 152, 154, 155, 157, 159, 160,
    162, 164, 166, 167, 169, 171, 173, 175, 176, 178, 180, 182, 184, 186, 187, 189,
    191, 193, 195, 197, 199, 201, 203, 205, 207, 209, 211, 213, 215, 217, 219, 221,
    223, 225, 227, 229, 231, 233, 235, 238, 240, 242, 244, 246, 248, 251, 253, 255,
];

/// The gamma table used by the strip pipeline
pub static WS281X_GAMMA_TABLE: GammaTable = GammaTable { lut: WS281X_LUT };

/// 256-entry gamma lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaTable {
    lut: [u8; 256],
}

impl GammaTable {
    /// Build a table for an arbitrary gamma exponent
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn with_exponent(exponent: f64) -> Self {
        let mut lut = [0u8; 256];
        for (index, value) in lut.iter_mut().enumerate() {
            let normalized = index as f64 / 255.0;
            *value = libm::floor(libm::pow(normalized, exponent) * 255.0 + 0.5) as u8;
        }
        Self { lut }
    }

    /// Correct a single channel value
    #[inline]
    #[allow(clippy::cast_lossless)]
    pub const fn correct(&self, value: u8) -> u8 {
        self.lut[value as usize]
    }

    /// Correct every byte of a packed color word, keeping channel order
    pub const fn correct_word(&self, word: u32) -> u32 {
        let [b0, b1, b2, b3] = word.to_le_bytes();
        u32::from_le_bytes([
            self.correct(b0),
            self.correct(b1),
            self.correct(b2),
            self.correct(b3),
        ])
    }

    /// Raw table values
    pub const fn as_array(&self) -> &[u8; 256] {
        &self.lut
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        WS281X_GAMMA_TABLE.clone()
    }
}

/// Gamma-correct a value with the WS281x curve
///
/// Matches the [`U8Adjuster`](crate::U8Adjuster) signature.
pub fn ws281x_gamma(value: u8) -> u8 {
    WS281X_GAMMA_TABLE.correct(value)
}
