//! Index remapping
//!
//! Compensates for physical wiring layouts (serpentine matrices, strips fed
//! from the middle...) by permuting pixel positions before transmission.

use heapless::Vec;

use crate::error::StripError;

/// Destination-indexed mapping: `output[i] = input[mapping[i]]`
///
/// N is the maximum number of LEDs the mapping can cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMapping<const N: usize> {
    indices: Vec<usize, N>,
}

impl<const N: usize> IndexMapping<N> {
    /// Create a mapping from a list of source indices
    pub fn new(indices: &[usize]) -> Result<Self, StripError> {
        let indices = Vec::from_slice(indices).map_err(|()| StripError::TooManyLeds {
            requested: indices.len(),
            capacity: N,
        })?;
        Ok(Self { indices })
    }

    /// Create the identity mapping for `len` pixels
    pub fn identity(len: usize) -> Result<Self, StripError> {
        if len > N {
            return Err(StripError::TooManyLeds {
                requested: len,
                capacity: N,
            });
        }
        Ok(Self {
            indices: (0..len).collect(),
        })
    }

    /// Source indices, one per destination position
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Check that the mapping can be applied to `len` pixels
    ///
    /// The mapping must cover every position, and the positions it covers
    /// must point inside the sequence. Entries past `len` are ignored.
    pub fn validate(&self, len: usize) -> Result<(), StripError> {
        if self.indices.len() < len {
            return Err(StripError::MappingTooShort {
                mapping: self.indices.len(),
                pixels: len,
            });
        }
        match self.indices[..len]
            .iter()
            .enumerate()
            .find(|&(_, &index)| index >= len)
        {
            Some((position, &index)) => Err(StripError::MappingOutOfRange {
                position,
                index,
                len,
            }),
            None => Ok(()),
        }
    }

    /// Permute the pixels in place
    ///
    /// Uses a scratch buffer on the stack; see [`remap_with`](Self::remap_with)
    /// to reuse one across frames.
    pub fn remap(&self, pixels: &mut [u32]) -> Result<(), StripError> {
        let mut snapshot = Vec::new();
        self.remap_with(pixels, &mut snapshot)
    }

    /// Permute the pixels in place, snapshotting them into `scratch` first
    ///
    /// Sources are read from the snapshot, so overlapping source and
    /// destination positions never alias. Nothing is written unless the
    /// mapping is valid for this pixel count.
    pub fn remap_with(
        &self,
        pixels: &mut [u32],
        scratch: &mut Vec<u32, N>,
    ) -> Result<(), StripError> {
        self.validate(pixels.len())?;
        scratch.clear();
        scratch
            .extend_from_slice(pixels)
            .map_err(|()| StripError::TooManyLeds {
                requested: pixels.len(),
                capacity: N,
            })?;

        for (pixel, &source) in pixels.iter_mut().zip(self.indices.iter()) {
            *pixel = scratch[source];
        }
        Ok(())
    }
}
