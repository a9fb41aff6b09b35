//! Transmission frame encoding
//!
//! Each pixel word becomes 4 little-endian bytes at offset `4 * i`.

use heapless::Vec;

use crate::error::StripError;

/// Encoded frame for up to N LEDs
///
/// The length is fixed when the frame is created and every `encode` must
/// supply exactly that many pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame<const N: usize> {
    words: Vec<[u8; 4], N>,
}

impl<const N: usize> EncodedFrame<N> {
    /// Allocate a zeroed frame for `num_leds` LEDs
    pub fn new(num_leds: usize) -> Result<Self, StripError> {
        if num_leds == 0 {
            return Err(StripError::NoLeds);
        }
        let mut words = Vec::new();
        words
            .resize(num_leds, [0; 4])
            .map_err(|()| StripError::TooManyLeds {
                requested: num_leds,
                capacity: N,
            })?;
        Ok(Self { words })
    }

    /// Number of LEDs the frame holds
    pub fn num_leds(&self) -> usize {
        self.words.len()
    }

    /// Check that `len` pixels fit the frame exactly
    pub fn check_len(&self, len: usize) -> Result<(), StripError> {
        if len != self.words.len() {
            return Err(StripError::LengthMismatch {
                expected: self.words.len(),
                actual: len,
            });
        }
        Ok(())
    }

    /// Write the pixels into the frame
    pub fn encode(&mut self, pixels: &[u32]) -> Result<(), StripError> {
        self.check_len(pixels.len())?;
        for (word, pixel) in self.words.iter_mut().zip(pixels) {
            *word = pixel.to_le_bytes();
        }
        Ok(())
    }

    /// Frame bytes, `4 * num_leds` long
    pub fn as_bytes(&self) -> &[u8] {
        self.words.as_flattened()
    }
}
