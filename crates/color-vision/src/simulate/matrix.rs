//! Deficiency transformation matrices.
//!
//! Each matrix maps an (r, g, b) column vector on the 0..=255 scale to the
//! color perceived under one deficiency. The values are fixed domain
//! constants; the simulator only ever reaches them through
//! [`MatrixTable::lookup`], so a different table can be substituted without
//! touching the transform.

use crate::color::Rgb;

use super::deficiency::VisionDeficiency;

/// A 3x3 linear color transform applied to gamma-encoded RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    /// Row-major coefficients: output channel `i` is `rows[i] . (r, g, b)`.
    pub rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    pub const IDENTITY: ColorMatrix = ColorMatrix {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Apply the matrix and map each channel through `round(clamp(x, 0, 255))`.
    ///
    /// Ties round away from zero (see [`Rgb::from_clamped`]).
    #[inline]
    pub fn apply(&self, color: Rgb) -> Rgb {
        let v = [color.r as f64, color.g as f64, color.b as f64];
        let [r, g, b] = self.rows.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2]);
        Rgb::from_clamped(r, g, b)
    }
}

/// Protanopia: no long-wavelength cones.
///
/// ```text
/// 0.567  0.433  0.000
/// 0.558  0.442  0.000
/// 0.000  0.242  0.758
/// ```
pub const PROTANOPIA: ColorMatrix = ColorMatrix::new([
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
]);

/// Deuteranopia: no medium-wavelength cones.
///
/// ```text
/// 0.625  0.375  0.000
/// 0.700  0.300  0.000
/// 0.000  0.300  0.700
/// ```
pub const DEUTERANOPIA: ColorMatrix = ColorMatrix::new([
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
]);

/// Tritanopia: no short-wavelength cones.
///
/// ```text
/// 0.950  0.050  0.000
/// 0.000  0.433  0.567
/// 0.000  0.475  0.525
/// ```
pub const TRITANOPIA: ColorMatrix = ColorMatrix::new([
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
]);

/// Achromatopsia: every channel becomes the Rec. 601 luma.
///
/// ```text
/// 0.299  0.587  0.114
/// 0.299  0.587  0.114
/// 0.299  0.587  0.114
/// ```
pub const ACHROMATOPSIA: ColorMatrix = ColorMatrix::new([
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
]);

/// One matrix per non-normal [`VisionDeficiency`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixTable {
    pub protanopia: ColorMatrix,
    pub deuteranopia: ColorMatrix,
    pub tritanopia: ColorMatrix,
    pub achromatopsia: ColorMatrix,
}

impl MatrixTable {
    /// The matrix for `deficiency`, or `None` for
    /// [`Normal`](VisionDeficiency::Normal), which has no matrix.
    #[inline]
    pub fn lookup(&self, deficiency: VisionDeficiency) -> Option<&ColorMatrix> {
        match deficiency {
            VisionDeficiency::Normal => None,
            VisionDeficiency::Protanopia => Some(&self.protanopia),
            VisionDeficiency::Deuteranopia => Some(&self.deuteranopia),
            VisionDeficiency::Tritanopia => Some(&self.tritanopia),
            VisionDeficiency::Achromatopsia => Some(&self.achromatopsia),
        }
    }
}

/// The built-in matrix table.
pub static STANDARD_MATRICES: MatrixTable = MatrixTable {
    protanopia: PROTANOPIA,
    deuteranopia: DEUTERANOPIA,
    tritanopia: TRITANOPIA,
    achromatopsia: ACHROMATOPSIA,
};
