//! Error type for the color-vision engine.
//!
//! Every failure is a local validation error reported synchronously. The
//! engine is deterministic, so retrying a failed call with the same input
//! fails the same way.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed hex string or out-of-range channel value.
    ///
    /// Hex input is accepted as `#RRGGBB`, bare `RRGGBB`, or the 3-digit
    /// shorthand `#RGB` / `RGB`. The shorthand forms are an intentional
    /// extension; any other length or a non-hex digit lands here.
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: String },

    /// Buffer length does not equal `width * height * 4`
    #[error("invalid buffer dimensions: {len} bytes for {width}x{height} RGBA")]
    InvalidBufferDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    /// Deficiency name outside the closed set
    #[error("unsupported deficiency type: {0}")]
    UnsupportedDeficiencyType(String),
}

impl EngineError {
    pub(crate) fn color_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
