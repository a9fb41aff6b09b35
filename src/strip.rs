#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::StripDriver;
use crate::brightness::BrightnessController;
use crate::config::{StripConfig, StripOptions};
use crate::error::StripError;
use crate::filter::{FilterProcessor, IndexMapping};
use crate::frame::EncodedFrame;
use crate::notify::{Notifier, ObserverRef};

/// Lifecycle of a strip controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Initialized,
}

/// Everything that only exists between `init` and `reset`
struct ActiveStrip<const MAX_LEDS: usize> {
    config: StripConfig,
    frame: EncodedFrame<MAX_LEDS>,
    filters: FilterProcessor,
    brightness: BrightnessController,
    /// Remap snapshot, reused every frame
    scratch: Vec<u32, MAX_LEDS>,
}

/// Strip controller - the pipeline orchestrator
///
/// Owns the configuration, the index mapping and the encoded frame, and
/// drives one strip through the driver `D`.
///
/// MAX_LEDS is the largest strip `init` accepts, MAX_OBSERVERS the number
/// of render observers that can be registered.
///
/// The controller does no locking of its own. Wrap it in a
/// [`SharedStrip`](crate::SharedStrip) to use it from several contexts.
pub struct Strip<'a, D: StripDriver, const MAX_LEDS: usize, const MAX_OBSERVERS: usize = 4> {
    // External dependencies
    driver: D,
    notifier: Notifier<'a, MAX_OBSERVERS>,

    // Survives reset
    mapping: Option<IndexMapping<MAX_LEDS>>,

    // Internal state
    active: Option<ActiveStrip<MAX_LEDS>>,
}

impl<'a, D: StripDriver, const MAX_LEDS: usize, const MAX_OBSERVERS: usize>
    Strip<'a, D, MAX_LEDS, MAX_OBSERVERS>
{
    /// Create an uninitialized strip controller
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            notifier: Notifier::new(),
            mapping: None,
            active: None,
        }
    }

    /// Initialize the strip
    ///
    /// Allocates a fresh frame for `num_leds` LEDs, discarding any previous
    /// one, and forwards the configuration and initial brightness to the
    /// driver.
    pub fn init(&mut self, num_leds: usize, options: &StripOptions) -> Result<(), StripError> {
        let config = StripConfig::resolve(options)?;
        let frame = EncodedFrame::new(num_leds)?;
        let brightness = BrightnessController::new(&config);

        self.driver.configure(num_leds, &config);
        self.driver.set_brightness(brightness.level());

        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.init] {} LEDs, strip type {}, gamma {}, rgbw {}",
            num_leds, config.strip_type, config.gamma_correction, config.rgb_to_rgbw
        );

        self.active = Some(ActiveStrip {
            config,
            frame,
            filters: FilterProcessor::new(&config),
            brightness,
            scratch: Vec::new(),
        });
        Ok(())
    }

    /// Stop the strip and release the frame
    ///
    /// Does nothing if the strip is not initialized. The index mapping and
    /// observers are kept.
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            self.driver.shutdown();
            #[cfg(feature = "esp32-log")]
            println!("[Strip.reset] strip released");
        }
    }

    /// Register an index mapping used by every following render
    ///
    /// The mapping may be set at any time; it is checked against the pixel
    /// count on each render.
    pub fn set_index_mapping(&mut self, mapping: &[usize]) -> Result<(), StripError> {
        self.mapping = Some(IndexMapping::new(mapping)?);
        Ok(())
    }

    /// Remove the index mapping
    pub fn clear_index_mapping(&mut self) {
        self.mapping = None;
    }

    /// Register a render observer
    ///
    /// Returns the observer if no slot is left
    pub fn subscribe(&mut self, observer: ObserverRef<'a>) -> Result<(), ObserverRef<'a>> {
        self.notifier.subscribe(observer)
    }

    /// Drop every registered observer
    pub fn unsubscribe_all(&mut self) {
        self.notifier.clear();
    }

    /// Render one frame
    ///
    /// Transforms the pixels in place (remap, RGBW, gamma), encodes and
    /// transmits them, and hands the same slice back. Callers that need the
    /// original colors afterwards must copy them first.
    pub fn render<'p>(&mut self, pixels: &'p mut [u32]) -> Result<&'p mut [u32], StripError> {
        let Some(active) = self.active.as_mut() else {
            #[cfg(feature = "esp32-log")]
            println!("[Strip.render] rejected, strip is not initialized");
            return Err(StripError::NotInitialized);
        };
        active.frame.check_len(pixels.len())?;
        if let Some(mapping) = &self.mapping {
            mapping.validate(pixels.len())?;
        }

        self.notifier.before(pixels);

        if let Some(mapping) = &self.mapping {
            mapping.remap_with(pixels, &mut active.scratch)?;
        }
        active.filters.apply(pixels);

        active.frame.encode(pixels)?;
        self.driver.transmit(active.frame.as_bytes());

        self.notifier.after(pixels);
        Ok(pixels)
    }

    /// Set the global brightness
    ///
    /// With `auto_render` the current frame is sent again so the change is
    /// visible at once; otherwise it shows with the next render.
    pub fn set_brightness(&mut self, brightness: u8, auto_render: bool) -> Result<(), StripError> {
        let Some(active) = self.active.as_mut() else {
            #[cfg(feature = "esp32-log")]
            println!("[Strip.set_brightness] rejected, strip is not initialized");
            return Err(StripError::NotInitialized);
        };
        let level = active.brightness.set(brightness);
        self.driver.set_brightness(level);
        if auto_render {
            self.driver.transmit(active.frame.as_bytes());
        }
        Ok(())
    }

    /// Current lifecycle state
    pub const fn state(&self) -> LifecycleState {
        if self.active.is_some() {
            LifecycleState::Initialized
        } else {
            LifecycleState::Uninitialized
        }
    }

    /// Configured LED count
    pub fn num_leds(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.frame.num_leds())
    }

    /// Active configuration
    pub fn config(&self) -> Option<&StripConfig> {
        self.active.as_ref().map(|active| &active.config)
    }

    /// Last requested brightness, before gamma correction
    pub fn brightness(&self) -> Option<u8> {
        self.active.as_ref().map(|active| active.brightness.requested())
    }

    /// Registered index mapping
    pub fn index_mapping(&self) -> Option<&IndexMapping<MAX_LEDS>> {
        self.mapping.as_ref()
    }

    /// Get a reference to the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
