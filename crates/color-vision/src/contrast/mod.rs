//! Contrast analysis.
//!
//! Pure functions over colors:
//!
//! - [`relative_luminance`] and [`contrast_ratio`] (WCAG 2.x formulas)
//! - [`meets_aa`] / [`meets_aaa`] and their large-text variants
//! - [`analyze_palette`]: every unordered pair of a palette
//! - [`to_perceptual_space`] / [`from_perceptual_space`]: RGB <-> LCh

mod analysis;
mod luminance;
mod perceptual;
mod wcag;

pub use analysis::{analyze_palette, ContrastResult};
pub use luminance::{relative_luminance, LUMINANCE_WEIGHTS};
pub use perceptual::{from_perceptual_space, to_perceptual_space};
pub use wcag::{
    contrast_ratio, meets_aa, meets_aa_large, meets_aaa, meets_aaa_large, WcagLevel, AAA_LARGE,
    AAA_NORMAL, AA_LARGE, AA_NORMAL, MAX_RATIO, MIN_RATIO,
};
