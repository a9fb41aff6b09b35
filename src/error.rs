//! Strip pipeline error types

use thiserror::Error;

use crate::config::StripType;

/// Errors from strip operations
///
/// Besides the lifecycle guard, every variant is a caller error caught at the
/// API boundary before any pixel or frame is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Render or brightness change before `init`
    #[error("operation before initialization")]
    NotInitialized,

    /// `init` called with zero LEDs
    #[error("LED count must be positive")]
    NoLeds,

    /// More LEDs requested than the strip was built for
    #[error("{requested} LEDs requested, capacity is {capacity}")]
    TooManyLeds { requested: usize, capacity: usize },

    /// Pixel sequence does not match the configured LED count
    #[error("expected {expected} pixels, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Index mapping does not cover every pixel
    #[error("index mapping has {mapping} entries, {pixels} pixels given")]
    MappingTooShort { mapping: usize, pixels: usize },

    /// Index mapping points outside the pixel sequence
    #[error("index mapping sends position {position} to {index}, outside {len} pixels")]
    MappingOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    /// RGB to RGBW conversion on a strip without a white channel
    #[error("strip type {0} has no white channel for RGBW conversion")]
    RgbwUnsupported(StripType),
}
