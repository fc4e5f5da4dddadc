//! CIE L*a*b* color space (D65 white point)
//!
//! Lab is the Cartesian form behind [`Lch`](super::Lch). Conversions go
//! through CIE XYZ using the sRGB primaries.

use super::linear_rgb::LinearRgb;

/// D65 reference white in CIE XYZ (Y normalized to 1.0)
pub const D65_WHITE_XYZ: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Linear sRGB to XYZ (D65)
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ (D65) to linear sRGB
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// 6/29, the break point of the Lab companding function
const DELTA: f64 = 6.0 / 29.0;

/// A color in CIE L*a*b*.
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green (negative) to red (positive)
/// - `b`: blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 color difference (Euclidean distance in Lab).
    ///
    /// A ΔE around 2.3 is the commonly quoted just-noticeable difference.
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline]
fn f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul(&RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
        let fx = f(x / D65_WHITE_XYZ[0]);
        let fy = f(y / D65_WHITE_XYZ[1]);
        let fz = f(z / D65_WHITE_XYZ[2]);
        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for LinearRgb {
    /// Convert back to linear RGB. The result is not clamped.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;
        let xyz = [
            f_inv(fx) * D65_WHITE_XYZ[0],
            f_inv(fy) * D65_WHITE_XYZ[1],
            f_inv(fz) * D65_WHITE_XYZ[2],
        ];
        let [r, g, b] = mul(&XYZ_TO_RGB, xyz);
        LinearRgb { r, g, b }
    }
}
