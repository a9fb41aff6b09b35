//! Render notifications
//!
//! Observers are told about each render pass twice: once with the pixels as
//! the caller passed them, once after every transform. They run
//! synchronously, in registration order, and must not be relied on for
//! correctness of the frame itself.

use embassy_time::{Duration, Instant};
use heapless::Vec;

/// Hook points around a render pass
pub trait RenderObserver {
    /// Called before any transform, with the caller's pixels
    fn before_render(&mut self, _pixels: &[u32]) {}

    /// Called after the frame was handed to the driver, with the final pixels
    fn after_render(&mut self, _pixels: &[u32]) {}
}

/// Type alias for a registered observer
pub type ObserverRef<'a> = &'a mut (dyn RenderObserver + Send);

/// Fixed-capacity list of observers
///
/// SIZE is the maximum number of observers.
pub struct Notifier<'a, const SIZE: usize> {
    observers: Vec<ObserverRef<'a>, SIZE>,
}

impl<'a, const SIZE: usize> Notifier<'a, SIZE> {
    /// Create an empty notifier
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer
    ///
    /// Returns the observer if the list is full
    pub fn subscribe(&mut self, observer: ObserverRef<'a>) -> Result<(), ObserverRef<'a>> {
        self.observers.push(observer)
    }

    /// Drop all observers
    pub fn clear(&mut self) {
        self.observers.clear();
    }

    pub(crate) fn before(&mut self, pixels: &[u32]) {
        for observer in &mut self.observers {
            observer.before_render(pixels);
        }
    }

    pub(crate) fn after(&mut self, pixels: &[u32]) {
        for observer in &mut self.observers {
            observer.after_render(pixels);
        }
    }
}

impl<const SIZE: usize> Default for Notifier<'_, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer that counts render passes and times the last one
#[derive(Debug, Clone)]
pub struct RenderMetrics {
    frames: u32,
    started: Option<Instant>,
    last_duration: Duration,
}

impl RenderMetrics {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            started: None,
            last_duration: Duration::from_millis(0),
        }
    }

    /// Completed render passes
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    /// Duration of the last completed render pass
    pub const fn last_duration(&self) -> Duration {
        self.last_duration
    }
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderObserver for RenderMetrics {
    fn before_render(&mut self, _pixels: &[u32]) {
        self.started = Some(Instant::now());
    }

    fn after_render(&mut self, _pixels: &[u32]) {
        if let Some(started) = self.started.take() {
            self.last_duration = Instant::now().duration_since(started);
            self.frames = self.frames.wrapping_add(1);
        }
    }
}
