//! Color and buffer simulation.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;

use super::deficiency::VisionDeficiency;
use super::matrix::{ColorMatrix, MatrixTable, STANDARD_MATRICES};

/// The capability "transform a color".
///
/// Implemented by [`ColorMatrix`], by [`VisionDeficiency`] (through the
/// standard table), and by [`Simulation`] (a deficiency bound to a
/// [`Simulator`]'s table).
pub trait ColorTransform {
    /// Transform one color.
    fn transform(&self, color: Rgb) -> Rgb;

    /// Whether [`transform`](ColorTransform::transform) is the identity.
    ///
    /// Buffer transforms skip all per-pixel work when this is true.
    fn is_identity(&self) -> bool {
        false
    }

    /// Transform the RGB channels of every pixel in place, in index order.
    ///
    /// Alpha is never touched.
    fn transform_buffer(&self, buffer: &mut PixelBuffer) {
        if self.is_identity() {
            return;
        }
        for pixel in buffer.pixels_mut() {
            let out = self.transform(Rgb::new(pixel[0], pixel[1], pixel[2]));
            pixel[..3].copy_from_slice(&out.to_bytes());
        }
    }
}

impl ColorTransform for ColorMatrix {
    #[inline]
    fn transform(&self, color: Rgb) -> Rgb {
        self.apply(color)
    }
}

impl ColorTransform for VisionDeficiency {
    #[inline]
    fn transform(&self, color: Rgb) -> Rgb {
        Simulator::default().transform_color(color, *self)
    }

    fn is_identity(&self) -> bool {
        self.is_normal()
    }
}

/// Simulates deficiencies using a borrowed [`MatrixTable`].
///
/// [`Simulator::default()`] uses [`STANDARD_MATRICES`].
///
/// # Example
///
/// ```
/// use color_vision::{PixelBuffer, Rgb, Simulator, VisionDeficiency};
///
/// let simulator = Simulator::default();
/// let red = Rgb::new(255, 0, 0);
/// let seen = simulator.transform_color(red, VisionDeficiency::Achromatopsia);
/// assert_eq!(seen.r, seen.g);
///
/// let mut buffer = PixelBuffer::filled(4, 4, red, 255);
/// simulator.transform_buffer(&mut buffer, VisionDeficiency::Achromatopsia);
/// assert_eq!(buffer.rgb_at(0), Some(seen));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    table: &'a MatrixTable,
}

impl Default for Simulator<'static> {
    fn default() -> Self {
        Self::new(&STANDARD_MATRICES)
    }
}

impl<'a> Simulator<'a> {
    pub const fn new(table: &'a MatrixTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &'a MatrixTable {
        self.table
    }

    /// Bind a deficiency to this simulator's table.
    pub fn simulation(&self, deficiency: VisionDeficiency) -> Simulation<'a> {
        Simulation {
            matrix: self.table.lookup(deficiency),
            deficiency,
        }
    }

    /// Color as perceived under `deficiency`.
    ///
    /// `Normal` returns `color` unchanged without a table lookup. Otherwise
    /// the deficiency's matrix is applied and each channel is mapped through
    /// `round(clamp(x, 0, 255))`, ties rounding away from zero.
    #[inline]
    pub fn transform_color(&self, color: Rgb, deficiency: VisionDeficiency) -> Rgb {
        if deficiency.is_normal() {
            return color;
        }
        match self.table.lookup(deficiency) {
            Some(matrix) => matrix.apply(color),
            None => color,
        }
    }

    /// Transform every pixel of `buffer` in place.
    ///
    /// The caller keeps ownership of the buffer; each pixel's RGB is
    /// overwritten exactly once, alpha untouched. `Normal` returns at once.
    ///
    /// The transform is lossy, so calls compose: simulating protanopia and
    /// then `Normal` leaves the protanopia result in place rather than
    /// restoring the original pixels. Use [`Simulator::transformed`] to keep
    /// the original.
    pub fn transform_buffer(&self, buffer: &mut PixelBuffer, deficiency: VisionDeficiency) {
        let simulation = self.simulation(deficiency);
        if simulation.is_identity() {
            tracing::trace!(%deficiency, "Identity simulation, buffer unchanged");
            return;
        }
        tracing::debug!(
            %deficiency,
            width = buffer.width(),
            height = buffer.height(),
            "Simulating deficiency over buffer"
        );
        simulation.transform_buffer(buffer);
    }

    /// Transformed copy of `buffer`; the input is left untouched.
    pub fn transformed(&self, buffer: &PixelBuffer, deficiency: VisionDeficiency) -> PixelBuffer {
        let mut out = buffer.clone();
        self.transform_buffer(&mut out, deficiency);
        out
    }
}

/// A deficiency resolved against a matrix table.
#[derive(Debug, Clone, Copy)]
pub struct Simulation<'a> {
    matrix: Option<&'a ColorMatrix>,
    deficiency: VisionDeficiency,
}

impl Simulation<'_> {
    #[inline]
    pub fn deficiency(&self) -> VisionDeficiency {
        self.deficiency
    }
}

impl ColorTransform for Simulation<'_> {
    #[inline]
    fn transform(&self, color: Rgb) -> Rgb {
        match self.matrix {
            Some(matrix) => matrix.apply(color),
            None => color,
        }
    }

    fn is_identity(&self) -> bool {
        self.matrix.is_none()
    }
}

/// [`Simulator::transform_color`] with the standard table.
pub fn transform_color(color: Rgb, deficiency: VisionDeficiency) -> Rgb {
    Simulator::default().transform_color(color, deficiency)
}

/// [`Simulator::transform_buffer`] with the standard table.
pub fn transform_buffer(buffer: &mut PixelBuffer, deficiency: VisionDeficiency) {
    Simulator::default().transform_buffer(buffer, deficiency)
}

/// [`Simulator::transformed`] with the standard table.
pub fn transformed(buffer: &PixelBuffer, deficiency: VisionDeficiency) -> PixelBuffer {
    Simulator::default().transformed(buffer, deficiency)
}

/// Fixed description of `deficiency`; see [`VisionDeficiency::describe`].
pub fn describe(deficiency: VisionDeficiency) -> &'static str {
    deficiency.describe()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate::matrix::{ACHROMATOPSIA, PROTANOPIA};

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        let data = (0..width * height)
            .flat_map(|i| {
                let v = (i * 37 % 256) as u8;
                [v, 255 - v, v / 2, (i % 256) as u8]
            })
            .collect();
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_normal_is_identity() {
        let c = Rgb::new(12, 34, 56);
        assert_eq!(transform_color(c, VisionDeficiency::Normal), c);
    }

    #[test]
    fn test_transform_uses_table_matrix() {
        let c = Rgb::new(200, 100, 50);
        assert_eq!(
            transform_color(c, VisionDeficiency::Protanopia),
            PROTANOPIA.apply(c)
        );
    }

    #[test]
    fn test_custom_table_is_used() {
        let table = MatrixTable {
            protanopia: ColorMatrix::IDENTITY,
            deuteranopia: ColorMatrix::IDENTITY,
            tritanopia: ColorMatrix::IDENTITY,
            achromatopsia: ColorMatrix::IDENTITY,
        };
        let simulator = Simulator::new(&table);
        let c = Rgb::new(255, 0, 0);
        assert_eq!(simulator.transform_color(c, VisionDeficiency::Achromatopsia), c);
        assert_ne!(transform_color(c, VisionDeficiency::Achromatopsia), c);
    }

    #[test]
    fn test_buffer_matches_per_color_and_keeps_alpha() {
        let original = gradient(7, 5);
        let mut buffer = original.clone();
        transform_buffer(&mut buffer, VisionDeficiency::Deuteranopia);

        assert_eq!(buffer.width(), 7);
        assert_eq!(buffer.height(), 5);
        for i in 0..original.pixel_count() {
            let expected =
                transform_color(original.rgb_at(i).unwrap(), VisionDeficiency::Deuteranopia);
            assert_eq!(buffer.rgb_at(i), Some(expected), "pixel {i}");
            assert_eq!(buffer.alpha_at(i), original.alpha_at(i), "alpha {i}");
        }
    }

    #[test]
    fn test_normal_buffer_is_untouched() {
        let original = gradient(4, 4);
        let mut buffer = original.clone();
        transform_buffer(&mut buffer, VisionDeficiency::Normal);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_normal_after_transform_does_not_restore() {
        let original = gradient(8, 8);
        let mut buffer = original.clone();
        transform_buffer(&mut buffer, VisionDeficiency::Protanopia);
        let after_protanopia = buffer.clone();

        transform_buffer(&mut buffer, VisionDeficiency::Normal);
        assert_eq!(buffer, after_protanopia);
        assert_ne!(buffer, original);
    }

    #[test]
    fn test_repeated_transforms_compose() {
        let original = gradient(6, 6);
        let mut buffer = original.clone();
        transform_buffer(&mut buffer, VisionDeficiency::Tritanopia);
        transform_buffer(&mut buffer, VisionDeficiency::Achromatopsia);

        let mut expected = transformed(&original, VisionDeficiency::Tritanopia);
        ACHROMATOPSIA.transform_buffer(&mut expected);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_transformed_leaves_input() {
        let original = gradient(3, 3);
        let copy = transformed(&original, VisionDeficiency::Achromatopsia);
        assert_eq!(original, gradient(3, 3));
        assert_ne!(copy, original);
    }

    #[test]
    fn test_trait_impls_agree() {
        let c = Rgb::new(90, 180, 45);
        for d in VisionDeficiency::ALL {
            let simulation = Simulator::default().simulation(d);
            assert_eq!(simulation.deficiency(), d);
            assert_eq!(d.transform(c), transform_color(c, d));
            assert_eq!(simulation.transform(c), transform_color(c, d));
            assert_eq!(simulation.is_identity(), d.is_normal());
        }
    }

    #[test]
    fn test_describe_delegates() {
        assert_eq!(
            describe(VisionDeficiency::Tritanopia),
            VisionDeficiency::Tritanopia.describe()
        );
    }
}
