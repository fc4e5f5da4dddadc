//! huelens - inspect artwork palettes under color-vision deficiency
//!
//! Command-line collaborator for the `color_vision` engine: decodes PNG
//! images into pixel buffers, builds reports from simulated colors and
//! contrast analysis, and exports dominant colors as a theme.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
