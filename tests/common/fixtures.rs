//! Test fixtures and constants.

use std::path::Path;

use color_vision::{PixelBuffer, Rgb};

/// Colors used across tests
pub mod colors {
    use color_vision::Rgb;

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const MID_GREY: Rgb = Rgb::new(128, 128, 128);

    /// Material red/green pair that reads as two colors to trichromats only
    pub const ALERT_RED: &str = "#d32f2f";
    pub const OK_GREEN: &str = "#388e3c";
}

/// Opaque buffer with horizontal bands: `bands[i].1` rows of `bands[i].0`
pub fn banded(width: usize, bands: &[(Rgb, usize)]) -> PixelBuffer {
    let mut pixels = Vec::new();
    for &(color, rows) in bands {
        pixels.extend(std::iter::repeat(color).take(width * rows));
    }
    let height = bands.iter().map(|(_, rows)| rows).sum();
    PixelBuffer::from_colors(width, height, &pixels).expect("bands fit the buffer")
}

/// 10x10 image: 60 red pixels followed by 40 blue
pub fn sixty_forty() -> PixelBuffer {
    banded(10, &[(colors::RED, 6), (colors::BLUE, 4)])
}

/// Buffer with a visible alpha gradient across its pixels
pub fn with_alpha_ramp(color: Rgb, width: usize, height: usize) -> PixelBuffer {
    let data = (0..width * height)
        .flat_map(|i| [color.r, color.g, color.b, (i * 255 / (width * height)) as u8])
        .collect();
    PixelBuffer::new(width, height, data).expect("ramp fits the buffer")
}

/// Write `buffer` as a PNG file
pub fn write_png(path: &Path, buffer: &PixelBuffer) {
    huelens::rendering::write_png(path, buffer).expect("Failed to write PNG fixture");
}
