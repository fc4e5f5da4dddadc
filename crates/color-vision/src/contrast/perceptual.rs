//! Conversion between 8-bit RGB and the perceptual LCh space.

use crate::color::{Lab, Lch, LinearRgb, Rgb};

/// RGB to CIE LCh(ab), via linear RGB, XYZ (D65) and Lab.
///
/// ```
/// use color_vision::{to_perceptual_space, Rgb};
///
/// let white = to_perceptual_space(Rgb::WHITE);
/// assert!((white.l - 100.0).abs() < 0.01);
/// assert!(white.c < 0.01);
/// ```
pub fn to_perceptual_space(color: Rgb) -> Lch {
    Lch::from(Lab::from(LinearRgb::from(color)))
}

/// CIE LCh(ab) back to RGB.
///
/// LCh values outside the sRGB gamut are clamped channel-wise, so the
/// round trip through [`to_perceptual_space`] is only approximate near the
/// gamut boundary.
pub fn from_perceptual_space(lch: Lch) -> Rgb {
    Rgb::from(LinearRgb::from(Lab::from(lch)))
}
