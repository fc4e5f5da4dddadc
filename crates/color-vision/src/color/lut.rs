//! Gamma conversion for 8-bit channels
//!
//! Decoding uses a 256-entry lookup table generated at compile time by
//! build.rs. Encoding is the exact inverse curve, since its input is a
//! continuous value.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/linear_lut.rs"));

/// Linear value below which the sRGB curve is a straight segment.
const LINEAR_KNEE: f64 = 0.03928 / 12.92;

/// Convert an 8-bit sRGB channel to linear light (0.0..=1.0).
///
/// Uses the WCAG 2.x curve: threshold 0.03928, exponent 2.4.
#[inline]
pub fn srgb8_to_linear(channel: u8) -> f64 {
    SRGB8_TO_LINEAR[channel as usize]
}

/// Convert a linear value to sRGB on the 0.0..=1.0 scale.
///
/// Input is clamped to 0.0..=1.0 first; out-of-gamut values from Lab
/// conversions land on the gamut boundary.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= LINEAR_KNEE {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
