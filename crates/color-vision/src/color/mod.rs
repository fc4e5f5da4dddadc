//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - [`Rgb`]: 8-bit sRGB. Boundary type for colors and pixels.
//! - [`LinearRgb`]: linear light. Basis for luminance and XYZ.
//! - [`Lab`] / [`Lch`]: CIE L*a*b* and its cylindrical form, D65 white.
//!
//! # Example
//!
//! ```
//! use color_vision::{Lch, LinearRgb, Rgb};
//! use color_vision::color::Lab;
//!
//! let color: Rgb = "#3366cc".parse().unwrap();
//! let lch = Lch::from(Lab::from(LinearRgb::from(color)));
//! let back = Rgb::from(LinearRgb::from(Lab::from(lch)));
//! assert_eq!(back, color);
//! ```

mod lab;
mod lch;
mod linear_rgb;
mod lut;
mod rgb;

pub use lab::{Lab, D65_WHITE_XYZ};
pub use lch::Lch;
pub use linear_rgb::LinearRgb;
pub use lut::{linear_to_srgb, srgb8_to_linear};
pub use rgb::Rgb;
