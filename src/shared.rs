//! Shared strip access for `no_std` environments.
//!
//! Puts the whole strip controller behind one `critical-section` mutex, so
//! render, brightness and reset calls from different tasks or interrupts are
//! serialized.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::StripDriver;
use crate::strip::Strip;

/// A strip controller guarded by a critical section.
pub struct SharedStrip<'a, D: StripDriver, const MAX_LEDS: usize, const MAX_OBSERVERS: usize = 4>
{
    inner: Mutex<RefCell<Strip<'a, D, MAX_LEDS, MAX_OBSERVERS>>>,
}

impl<'a, D: StripDriver, const MAX_LEDS: usize, const MAX_OBSERVERS: usize>
    SharedStrip<'a, D, MAX_LEDS, MAX_OBSERVERS>
{
    /// Wrap a strip controller.
    pub const fn new(strip: Strip<'a, D, MAX_LEDS, MAX_OBSERVERS>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(strip)),
        }
    }

    /// Run `f` with exclusive access to the strip.
    ///
    /// The whole call runs inside a critical section, so keep it short.
    /// Calling `with` again from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&mut Strip<'a, D, MAX_LEDS, MAX_OBSERVERS>) -> R) -> R {
        critical_section::with(|cs| {
            let mut strip = self.inner.borrow(cs).borrow_mut();
            f(&mut strip)
        })
    }

    /// Unwrap the strip controller.
    pub fn into_inner(self) -> Strip<'a, D, MAX_LEDS, MAX_OBSERVERS> {
        self.inner.into_inner().into_inner()
    }
}
