#![no_std]

pub mod brightness;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod frame;
pub mod gamma;
pub mod notify;
pub mod shared;
pub mod strip;

pub use brightness::U8Adjuster;
pub use config::{StripConfig, StripOptions, StripType};
pub use error::StripError;
pub use filter::IndexMapping;
pub use frame::EncodedFrame;
pub use gamma::{GammaTable, WS281X_GAMMA, WS281X_GAMMA_TABLE, ws281x_gamma};
pub use notify::{Notifier, ObserverRef, RenderMetrics, RenderObserver};
pub use shared::SharedStrip;
pub use strip::{LifecycleState, Strip};

pub use color::{Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract strip driver trait
///
/// Implement this trait to hand encoded frames to the hardware stage
/// (PWM + DMA, SPI, RMT...). The strip controller is generic over this trait
/// and never interprets what the driver does with the data.
pub trait StripDriver {
    /// Apply the strip configuration before the first frame
    fn configure(&mut self, num_leds: usize, config: &StripConfig);

    /// Transmit an encoded frame (4 little-endian bytes per LED)
    fn transmit(&mut self, frame: &[u8]);

    /// Set the global hardware brightness
    fn set_brightness(&mut self, brightness: u8);

    /// Stop transmission and release the hardware
    fn shutdown(&mut self);
}

impl<D: StripDriver + ?Sized> StripDriver for &mut D {
    fn configure(&mut self, num_leds: usize, config: &StripConfig) {
        (**self).configure(num_leds, config);
    }

    fn transmit(&mut self, frame: &[u8]) {
        (**self).transmit(frame);
    }

    fn set_brightness(&mut self, brightness: u8) {
        (**self).set_brightness(brightness);
    }

    fn shutdown(&mut self) {
        (**self).shutdown();
    }
}

/// Driver that discards everything
///
/// Used on hosts without strip hardware, so the pipeline can still run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDriver;

impl StripDriver for NullDriver {
    fn configure(&mut self, _num_leds: usize, _config: &StripConfig) {}

    fn transmit(&mut self, _frame: &[u8]) {}

    fn set_brightness(&mut self, _brightness: u8) {}

    fn shutdown(&mut self) {}
}
