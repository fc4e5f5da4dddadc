//! CIE LCh(ab): the cylindrical form of Lab
//!
//! Lightness, chroma, hue. Used for perceptually uniform reasoning about
//! palette colors.

use serde::{Deserialize, Serialize};

use super::lab::Lab;

/// Chroma below which the hue is undefined and reported as 0.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// A color in CIE LCh(ab), D65 white point.
///
/// - `l`: lightness, 0.0..=100.0 for in-gamut colors
/// - `c`: chroma, >= 0.0
/// - `h`: hue angle in degrees, 0.0..360.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    /// Create an LCh color. The hue is normalized into 0.0..360.0.
    ///
    /// # Example
    /// ```
    /// use color_vision::Lch;
    /// let lch = Lch::new(50.0, 30.0, -90.0);
    /// assert_eq!(lch.h, 270.0);
    /// ```
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: h.rem_euclid(360.0),
        }
    }

    /// CIE76 ΔE between two colors, computed on their Lab forms.
    pub fn delta_e(self, other: Lch) -> f64 {
        Lab::from(self).delta_e(Lab::from(other))
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0)
        };
        Lch { l: lab.l, c, h }
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        let (sin, cos) = lch.h.to_radians().sin_cos();
        Lab {
            l: lch.l,
            a: lch.c * cos,
            b: lch.c * sin,
        }
    }
}
