//! Linear RGB color type
//!
//! Linear RGB is the space where luminance and XYZ are linear combinations
//! of the channels.

use super::lut::{linear_to_srgb, srgb8_to_linear};
use super::rgb::Rgb;

/// A color in linear-light RGB (sRGB primaries).
///
/// Values are typically in the range 0.0..=1.0 but may leave it for
/// out-of-gamut colors coming back from Lab/LCh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Gamma-decode through the 8-bit lookup table.
    fn from(color: Rgb) -> Self {
        Self {
            r: srgb8_to_linear(color.r),
            g: srgb8_to_linear(color.g),
            b: srgb8_to_linear(color.b),
        }
    }
}

impl From<LinearRgb> for Rgb {
    /// Gamma-encode, clamping each channel to the sRGB gamut.
    fn from(linear: LinearRgb) -> Self {
        Rgb::from_clamped(
            linear_to_srgb(linear.r) * 255.0,
            linear_to_srgb(linear.g) * 255.0,
            linear_to_srgb(linear.b) * 255.0,
        )
    }
}
