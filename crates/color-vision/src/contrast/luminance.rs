//! WCAG relative luminance.

use crate::color::{LinearRgb, Rgb};

/// Rec. 709 luminance weights for linear R, G, B.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Perceptually weighted brightness of `color`, in 0.0..=1.0.
///
/// Each channel is linearized with the WCAG curve (threshold 0.03928,
/// exponent 2.4) and the results are weighted by [`LUMINANCE_WEIGHTS`].
///
/// ```
/// use color_vision::{relative_luminance, Rgb};
///
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
/// ```
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = LinearRgb::from(color);
    LUMINANCE_WEIGHTS[0] * linear.r
        + LUMINANCE_WEIGHTS[1] * linear.g
        + LUMINANCE_WEIGHTS[2] * linear.b
}
