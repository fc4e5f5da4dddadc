//! Lay out several equally sized buffers next to each other.

use color_vision::buffer::CHANNELS;
use color_vision::{EngineError, PixelBuffer};

/// Place `panels` left to right in one buffer.
///
/// All panels must share the first panel's dimensions; an empty slice
/// yields a 0x0 buffer.
pub fn side_by_side(panels: &[&PixelBuffer]) -> Result<PixelBuffer, EngineError> {
    let Some(first) = panels.first() else {
        return PixelBuffer::new(0, 0, Vec::new());
    };
    let (width, height) = (first.width(), first.height());

    if let Some(odd) = panels
        .iter()
        .find(|p| p.width() != width || p.height() != height)
    {
        return Err(EngineError::InvalidBufferDimensions {
            width,
            height,
            len: odd.as_bytes().len(),
        });
    }

    let row_bytes = width * CHANNELS;
    let mut data = Vec::with_capacity(row_bytes * panels.len() * height);
    for y in 0..height {
        for panel in panels {
            data.extend_from_slice(&panel.as_bytes()[y * row_bytes..(y + 1) * row_bytes]);
        }
    }
    PixelBuffer::new(width * panels.len(), height, data)
}
