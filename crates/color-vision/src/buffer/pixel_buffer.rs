//! RGBA pixel buffer with validated dimensions.

use crate::color::Rgb;
use crate::error::{EngineError, Result};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A decoded image: `width * height` pixels, 4 bytes each, row-major RGBA.
///
/// The length invariant is checked once in [`PixelBuffer::new`]; engine
/// operations never resize or reorder pixels.
///
/// # Example
///
/// ```
/// use color_vision::{PixelBuffer, Rgb};
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 128]).unwrap();
/// assert_eq!(buffer.pixel_count(), 2);
/// assert_eq!(buffer.rgb_at(1), Some(Rgb::new(0, 0, 255)));
///
/// assert!(PixelBuffer::new(2, 1, vec![0; 7]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap RGBA bytes, checking `data.len() == width * height * 4`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBufferDimensions`] on any mismatch,
    /// including a length that is not a multiple of 4.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS));
        if expected != Some(data.len()) {
            return Err(EngineError::InvalidBufferDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by filling every pixel with one color and alpha.
    pub fn filled(width: usize, height: usize, color: Rgb, alpha: u8) -> Self {
        let [r, g, b] = color.to_bytes();
        let data = [r, g, b, alpha].repeat(width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a buffer from opaque colors, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBufferDimensions`] if `colors.len()`
    /// is not `width * height`.
    pub fn from_colors(width: usize, height: usize, colors: &[Rgb]) -> Result<Self> {
        let data = colors
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, u8::MAX])
            .collect();
        Self::new(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its RGBA bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as `[R, G, B, A]` slices.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(CHANNELS)
    }

    /// Mutable iteration over pixels, in index order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// RGB of the pixel at `index`, ignoring alpha.
    pub fn rgb_at(&self, index: usize) -> Option<Rgb> {
        let start = index.checked_mul(CHANNELS)?;
        self.data
            .get(start..start.checked_add(3)?)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
    }

    /// Alpha of the pixel at `index`.
    pub fn alpha_at(&self, index: usize) -> Option<u8> {
        let offset = index.checked_mul(CHANNELS)?.checked_add(3)?;
        self.data.get(offset).copied()
    }
}
