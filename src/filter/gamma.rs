//! Gamma correction filter
//!
//! Remaps every byte of every pixel word through a gamma table.

use crate::gamma::{GammaTable, WS281X_GAMMA_TABLE};

use super::Filter;

/// Gamma correction filter
#[derive(Debug, Clone, Copy)]
pub(crate) struct GammaCorrection {
    table: &'static GammaTable,
}

impl GammaCorrection {
    /// Create a filter using the WS281x curve
    pub(crate) fn ws281x() -> Self {
        Self {
            table: &WS281X_GAMMA_TABLE,
        }
    }
}

impl Filter for GammaCorrection {
    fn apply(&self, pixels: &mut [u32]) {
        for pixel in pixels.iter_mut() {
            *pixel = self.table.correct_word(*pixel);
        }
    }
}
