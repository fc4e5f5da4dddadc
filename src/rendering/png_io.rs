//! PNG decoding into RGBA pixel buffers and encoding back.
//!
//! Every input is normalized to 8-bit RGBA: palette images are expanded,
//! 16-bit samples are stripped, and gray or RGB data gains an opaque alpha
//! channel.

use std::io::Cursor;
use std::path::Path;

use color_vision::buffer::CHANNELS;
use color_vision::PixelBuffer;

use crate::error::ImageError;

/// Decode PNG bytes into an RGBA buffer.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    let mut raw = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut raw)
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    raw.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedFormat(format!(
            "{:?} bit depth after normalization",
            frame.bit_depth
        )));
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    let rgba = to_rgba(raw, frame.color_type, frame.line_size, width, height)?;

    tracing::debug!(width, height, color_type = ?frame.color_type, "Decoded PNG");
    Ok(PixelBuffer::new(width, height, rgba)?)
}

/// Expand decoded rows of any 8-bit color type into packed RGBA.
fn to_rgba(
    raw: Vec<u8>,
    color_type: png::ColorType,
    line_size: usize,
    width: usize,
    height: usize,
) -> Result<Vec<u8>, ImageError> {
    let samples = match color_type {
        png::ColorType::Rgba => 4,
        png::ColorType::Rgb => 3,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Grayscale => 1,
        png::ColorType::Indexed => {
            return Err(ImageError::UnsupportedFormat(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    if samples == CHANNELS && line_size == width * CHANNELS {
        return Ok(raw);
    }

    let mut rgba = Vec::with_capacity(width * height * CHANNELS);
    for row in raw.chunks(line_size).take(height) {
        for px in row[..width * samples].chunks_exact(samples) {
            let alpha = match samples {
                4 | 2 => px[samples - 1],
                _ => 255,
            };
            if samples >= 3 {
                rgba.extend_from_slice(&px[..3]);
            } else {
                rgba.extend_from_slice(&[px[0]; 3]);
            }
            rgba.push(alpha);
        }
    }
    Ok(rgba)
}

/// Encode an RGBA buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
    let width = u32::try_from(buffer.width())
        .map_err(|_| ImageError::Encode(format!("width {} too large", buffer.width())))?;
    let height = u32::try_from(buffer.height())
        .map_err(|_| ImageError::Encode(format!("height {} too large", buffer.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        writer
            .write_image_data(buffer.as_bytes())
            .map_err(|e| ImageError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<PixelBuffer, ImageError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode and write a PNG file. Returns the number of bytes written.
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<usize, ImageError> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, &bytes)?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_vision::Rgb;

    fn encode_raw(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_rgba_round_trip() {
        let data: Vec<u8> = (0..2 * 3 * 4).map(|i| (i * 10) as u8).collect();
        let buffer = PixelBuffer::new(2, 3, data.clone()).unwrap();

        let png_bytes = encode_png(&buffer).unwrap();
        assert_eq!(&png_bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let decoded = decode_png(&png_bytes).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_rgb_gains_opaque_alpha() {
        let png_bytes = encode_raw(2, 1, png::ColorType::Rgb, &[255, 0, 0, 0, 0, 255]);
        let decoded = decode_png(&png_bytes).unwrap();

        assert_eq!(decoded.as_bytes(), &[255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_grayscale_expands_to_rgb() {
        let png_bytes = encode_raw(3, 1, png::ColorType::Grayscale, &[0, 128, 255]);
        let decoded = decode_png(&png_bytes).unwrap();

        assert_eq!(decoded.rgb_at(1), Some(Rgb::new(128, 128, 128)));
        assert_eq!(decoded.alpha_at(2), Some(255));
    }

    #[test]
    fn test_grayscale_alpha_keeps_alpha() {
        let png_bytes = encode_raw(1, 1, png::ColorType::GrayscaleAlpha, &[200, 17]);
        let decoded = decode_png(&png_bytes).unwrap();

        assert_eq!(decoded.as_bytes(), &[200, 200, 200, 17]);
    }

    #[test]
    fn test_indexed_is_expanded() {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 2, 1);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(vec![10, 20, 30, 40, 50, 60]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 0]).unwrap();
        }

        let decoded = decode_png(&buf).unwrap();
        assert_eq!(decoded.rgb_at(0), Some(Rgb::new(40, 50, 60)));
        assert_eq!(decoded.rgb_at(1), Some(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = decode_png(b"definitely not a png");
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        let buffer = PixelBuffer::filled(4, 4, Rgb::new(1, 2, 3), 255);

        let written = write_png(&path, &buffer).unwrap();
        assert!(written > 0);
        assert_eq!(read_png(&path).unwrap(), buffer);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_png(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(ImageError::Io(_))));
    }
}
