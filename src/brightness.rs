//! Global brightness control
//!
//! The requested value is kept as-is; what reaches the driver may be passed
//! through an adjuster first (gamma correction when enabled).

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::StripConfig;
use crate::gamma::ws281x_gamma;

/// Type alias for a function that adjusts a u8 value
pub type U8Adjuster = fn(value: u8) -> u8;

/// Brightness state and correction
#[derive(Debug, Clone)]
pub(crate) struct BrightnessController {
    /// Adjustment applied before forwarding
    adjust: Option<U8Adjuster>,
    /// Last requested brightness (0-255)
    requested: u8,
}

impl BrightnessController {
    /// Create a controller for the given configuration
    pub(crate) fn new(config: &StripConfig) -> Self {
        let adjust: Option<U8Adjuster> = if config.gamma_correction {
            Some(ws281x_gamma)
        } else {
            None
        };
        Self {
            adjust,
            requested: config.brightness,
        }
    }

    /// Store a new brightness and return the level for the driver
    pub(crate) fn set(&mut self, brightness: u8) -> u8 {
        self.requested = brightness;
        let level = self.level();
        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessController.set] setting brightness to {:?} ({:?})",
            brightness, level
        );
        level
    }

    /// Last requested brightness
    pub(crate) const fn requested(&self) -> u8 {
        self.requested
    }

    /// Brightness as forwarded to the driver
    pub(crate) fn level(&self) -> u8 {
        match self.adjust {
            Some(adjust) => adjust(self.requested),
            None => self.requested,
        }
    }
}
