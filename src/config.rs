//! Strip configuration
//!
//! [`StripOptions`] is what callers pass to `init`: every field is optional.
//! It resolves into a [`StripConfig`] with all defaults filled in.

use core::fmt;

use crate::error::StripError;

const STRIP_NAME_RGB: &str = "rgb";
const STRIP_NAME_RBG: &str = "rbg";
const STRIP_NAME_GRB: &str = "grb";
const STRIP_NAME_GBR: &str = "gbr";
const STRIP_NAME_BRG: &str = "brg";
const STRIP_NAME_BGR: &str = "bgr";
const STRIP_NAME_RGBW: &str = "rgbw";
const STRIP_NAME_RBGW: &str = "rbgw";
const STRIP_NAME_GRBW: &str = "grbw";
const STRIP_NAME_GBRW: &str = "gbrw";
const STRIP_NAME_BRGW: &str = "brgw";
const STRIP_NAME_BGRW: &str = "bgrw";

// Aliases for the common chip names
const STRIP_ALIAS_WS2812: &str = "ws2812";
const STRIP_ALIAS_SK6812: &str = "sk6812";
const STRIP_ALIAS_SK6812W: &str = "sk6812w";

// Channel shift codes: white, red, green, blue bit offsets, one per byte
const WS2811_STRIP_RGB: u32 = 0x0010_0800;
const WS2811_STRIP_RBG: u32 = 0x0010_0008;
const WS2811_STRIP_GRB: u32 = 0x0008_1000;
const WS2811_STRIP_GBR: u32 = 0x0008_0010;
const WS2811_STRIP_BRG: u32 = 0x0000_1008;
const WS2811_STRIP_BGR: u32 = 0x0000_0810;
const SK6812_STRIP_RGBW: u32 = 0x1810_0800;
const SK6812_STRIP_RBGW: u32 = 0x1810_0008;
const SK6812_STRIP_GRBW: u32 = 0x1808_1000;
const SK6812_STRIP_GBRW: u32 = 0x1808_0010;
const SK6812_STRIP_BRGW: u32 = 0x1800_1008;
const SK6812_STRIP_BGRW: u32 = 0x1800_0810;

const WHITE_SHIFT_MASK: u32 = 0xFF00_0000;

/// Default PWM frequency, Hz
pub const DEFAULT_FREQUENCY: u32 = 800_000;
/// Default DMA channel
pub const DEFAULT_DMA_CHANNEL: u8 = 10;
/// Default data pin
pub const DEFAULT_GPIO_PIN: u8 = 18;
/// Default global brightness
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Known strip types, named by the order the chip expects its channels.
///
/// The `*W` variants are four-channel (SK6812 RGBW) strips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum StripType {
    Rgb = WS2811_STRIP_RGB,
    Rbg = WS2811_STRIP_RBG,
    /// WS2812 and SK6812 (RGB) order
    #[default]
    Grb = WS2811_STRIP_GRB,
    Gbr = WS2811_STRIP_GBR,
    Brg = WS2811_STRIP_BRG,
    Bgr = WS2811_STRIP_BGR,
    Rgbw = SK6812_STRIP_RGBW,
    Rbgw = SK6812_STRIP_RBGW,
    /// SK6812W order
    Grbw = SK6812_STRIP_GRBW,
    Gbrw = SK6812_STRIP_GBRW,
    Brgw = SK6812_STRIP_BRGW,
    Bgrw = SK6812_STRIP_BGRW,
}

impl StripType {
    pub fn from_raw(value: u32) -> Option<Self> {
        Some(match value {
            WS2811_STRIP_RGB => Self::Rgb,
            WS2811_STRIP_RBG => Self::Rbg,
            WS2811_STRIP_GRB => Self::Grb,
            WS2811_STRIP_GBR => Self::Gbr,
            WS2811_STRIP_BRG => Self::Brg,
            WS2811_STRIP_BGR => Self::Bgr,
            SK6812_STRIP_RGBW => Self::Rgbw,
            SK6812_STRIP_RBGW => Self::Rbgw,
            SK6812_STRIP_GRBW => Self::Grbw,
            SK6812_STRIP_GBRW => Self::Gbrw,
            SK6812_STRIP_BRGW => Self::Brgw,
            SK6812_STRIP_BGRW => Self::Bgrw,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u32 {
        self as u32
    }

    pub fn parse_from_str(value: &str) -> Option<Self> {
        Some(match value {
            STRIP_NAME_RGB => Self::Rgb,
            STRIP_NAME_RBG => Self::Rbg,
            STRIP_NAME_GRB | STRIP_ALIAS_WS2812 | STRIP_ALIAS_SK6812 => Self::Grb,
            STRIP_NAME_GBR => Self::Gbr,
            STRIP_NAME_BRG => Self::Brg,
            STRIP_NAME_BGR => Self::Bgr,
            STRIP_NAME_RGBW => Self::Rgbw,
            STRIP_NAME_RBGW => Self::Rbgw,
            STRIP_NAME_GRBW | STRIP_ALIAS_SK6812W => Self::Grbw,
            STRIP_NAME_GBRW => Self::Gbrw,
            STRIP_NAME_BRGW => Self::Brgw,
            STRIP_NAME_BGRW => Self::Bgrw,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => STRIP_NAME_RGB,
            Self::Rbg => STRIP_NAME_RBG,
            Self::Grb => STRIP_NAME_GRB,
            Self::Gbr => STRIP_NAME_GBR,
            Self::Brg => STRIP_NAME_BRG,
            Self::Bgr => STRIP_NAME_BGR,
            Self::Rgbw => STRIP_NAME_RGBW,
            Self::Rbgw => STRIP_NAME_RBGW,
            Self::Grbw => STRIP_NAME_GRBW,
            Self::Gbrw => STRIP_NAME_GBRW,
            Self::Brgw => STRIP_NAME_BRGW,
            Self::Bgrw => STRIP_NAME_BGRW,
        }
    }

    /// Check if the strip has a fourth (white) channel
    pub const fn has_white_channel(self) -> bool {
        self.raw() & WHITE_SHIFT_MASK != 0
    }
}

impl fmt::Display for StripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by `init`
///
/// Absent fields fall back to the defaults documented on [`StripConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOptions {
    pub gamma_correction: Option<bool>,
    pub rgb_to_rgbw: Option<bool>,
    pub strip_type: Option<StripType>,
    pub frequency: Option<u32>,
    pub dma_channel: Option<u8>,
    pub gpio_pin: Option<u8>,
    pub invert: Option<bool>,
    pub brightness: Option<u8>,
}

impl StripOptions {
    /// Set the strip type from a raw channel-order code
    ///
    /// Unknown codes leave the strip type unset, so the default applies.
    #[must_use]
    pub fn with_raw_strip_type(mut self, raw: u32) -> Self {
        self.strip_type = StripType::from_raw(raw);
        self
    }
}

/// Resolved strip configuration, fixed for one initialized period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Gamma-correct pixels and brightness (default: off)
    pub gamma_correction: bool,
    /// Derive a white channel from RGB (default: off, needs a `*W` strip)
    pub rgb_to_rgbw: bool,
    /// Channel order of the strip (default: [`StripType::Grb`])
    pub strip_type: StripType,
    /// PWM frequency in Hz (default: 800 kHz)
    pub frequency: u32,
    /// DMA channel (default: 10)
    pub dma_channel: u8,
    /// Data pin (default: 18)
    pub gpio_pin: u8,
    /// Invert the output signal (default: off)
    pub invert: bool,
    /// Initial global brightness (default: 255)
    pub brightness: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            gamma_correction: false,
            rgb_to_rgbw: false,
            strip_type: StripType::default(),
            frequency: DEFAULT_FREQUENCY,
            dma_channel: DEFAULT_DMA_CHANNEL,
            gpio_pin: DEFAULT_GPIO_PIN,
            invert: false,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl StripConfig {
    /// Fill in defaults and check the result
    pub fn resolve(options: &StripOptions) -> Result<Self, StripError> {
        let defaults = Self::default();
        let config = Self {
            gamma_correction: options.gamma_correction.unwrap_or(defaults.gamma_correction),
            rgb_to_rgbw: options.rgb_to_rgbw.unwrap_or(defaults.rgb_to_rgbw),
            strip_type: options.strip_type.unwrap_or(defaults.strip_type),
            frequency: options.frequency.unwrap_or(defaults.frequency),
            dma_channel: options.dma_channel.unwrap_or(defaults.dma_channel),
            gpio_pin: options.gpio_pin.unwrap_or(defaults.gpio_pin),
            invert: options.invert.unwrap_or(defaults.invert),
            brightness: options.brightness.unwrap_or(defaults.brightness),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the pipeline cannot honor
    pub fn validate(&self) -> Result<(), StripError> {
        if self.rgb_to_rgbw && !self.strip_type.has_white_channel() {
            return Err(StripError::RgbwUnsupported(self.strip_type));
        }
        Ok(())
    }
}
