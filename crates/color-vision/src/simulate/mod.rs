//! Color-vision deficiency simulation.
//!
//! Maps a color, or every pixel of a [`PixelBuffer`](crate::PixelBuffer),
//! through the fixed linear transform for a [`VisionDeficiency`].
//!
//! # Architecture
//!
//! - [`VisionDeficiency`]: the closed set of simulated types.
//! - [`MatrixTable`]: one [`ColorMatrix`] per non-normal type.
//!   [`STANDARD_MATRICES`] is the built-in table.
//! - [`Simulator`]: applies a table's matrices to colors and buffers.
//! - [`ColorTransform`]: the shared capability, implemented by matrices,
//!   deficiencies and bound [`Simulation`]s.
//!
//! # Rounding
//!
//! Matrix output is mapped through `round(clamp(x, 0, 255))` with
//! [`f64::round`] (ties away from zero). Implementations that need
//! bit-identical output must use the same tie-break.

mod deficiency;
mod matrix;
mod simulator;

pub use deficiency::VisionDeficiency;
pub use matrix::{
    ColorMatrix, MatrixTable, ACHROMATOPSIA, DEUTERANOPIA, PROTANOPIA, STANDARD_MATRICES,
    TRITANOPIA,
};
pub use simulator::{
    describe, transform_buffer, transform_color, transformed, ColorTransform, Simulation,
    Simulator,
};
