//! Pixel buffer types
//!
//! [`PixelBuffer`] is the decoded-image boundary of the engine: row-major
//! RGBA bytes with fixed dimensions. Decoding and encoding image files is
//! the caller's job.

mod pixel_buffer;

pub use pixel_buffer::{PixelBuffer, CHANNELS};
