//! color-vision: color-vision deficiency simulation and WCAG contrast analysis
//!
//! This library is the color-science engine behind huelens. It has two
//! independent halves, composed by a caller that owns colors and decoded
//! pixel buffers:
//!
//! - **Simulation** ([`simulate`]): how a color, or every pixel of an image,
//!   appears under one of five [`VisionDeficiency`] types.
//! - **Analysis** ([`contrast`], [`extract`]): WCAG contrast ratios and
//!   AA/AAA verdicts, RGB <-> LCh conversion, and a naive frequency-based
//!   palette extractor.
//!
//! There is no I/O here. Image decoding happens in the caller, which hands
//! the engine an already-decoded [`PixelBuffer`].
//!
//! # Quick Start
//!
//! ```
//! use color_vision::{contrast_ratio, meets_aa, transform_color, Rgb, VisionDeficiency};
//!
//! let text: Rgb = "#d32f2f".parse().unwrap();
//! let background: Rgb = "#388e3c".parse().unwrap();
//!
//! // What a protanope sees
//! let seen_text = transform_color(text, VisionDeficiency::Protanopia);
//! let seen_background = transform_color(background, VisionDeficiency::Protanopia);
//!
//! let ratio = contrast_ratio(seen_text, seen_background);
//! assert!(!meets_aa(ratio));
//! ```
//!
//! # Buffers
//!
//! ```
//! use color_vision::{extract_dominant_colors, transform_buffer, PixelBuffer, Rgb, VisionDeficiency};
//!
//! let mut buffer = PixelBuffer::filled(8, 8, Rgb::new(255, 0, 0), 255);
//! transform_buffer(&mut buffer, VisionDeficiency::Achromatopsia);
//!
//! let palette = extract_dominant_colors(&buffer, 3);
//! assert_eq!(palette, vec![Rgb::new(76, 76, 76)]);
//! ```
//!
//! # Constant Tables
//!
//! The deficiency matrices ([`STANDARD_MATRICES`]), the 8-bit linearization
//! table and the WCAG thresholds are immutable statics. The simulator only
//! reaches the matrices through [`MatrixTable::lookup`], so a different
//! table can be passed to [`Simulator::new`].
//!
//! # Rounding
//!
//! Every float-to-channel conversion is `round(clamp(x, 0, 255))` using
//! [`f64::round`], which rounds ties away from zero.

pub mod buffer;
pub mod color;
pub mod contrast;
pub mod error;
pub mod extract;
pub mod simulate;


pub use buffer::PixelBuffer;
pub use color::{Lch, LinearRgb, Rgb};
pub use contrast::{
    analyze_palette, contrast_ratio, from_perceptual_space, meets_aa, meets_aaa,
    relative_luminance, to_perceptual_space, ContrastResult, WcagLevel,
};
pub use error::{EngineError, Result};
pub use extract::{extract_dominant_colors, ColorHistogram, ExtractionPolicy};
pub use simulate::{
    describe, transform_buffer, transform_color, transformed, ColorMatrix, ColorTransform,
    MatrixTable, Simulator, VisionDeficiency, STANDARD_MATRICES,
};
