//! WCAG contrast ratio and conformance thresholds.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

use super::luminance::relative_luminance;

/// Minimum ratio for AA with normal-size text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AAA with normal-size text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA with large text (18pt, or 14pt bold).
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA with large text.
pub const AAA_LARGE: f64 = 4.5;

/// Lowest possible contrast ratio (identical luminance).
pub const MIN_RATIO: f64 = 1.0;
/// Highest possible contrast ratio (white on black).
pub const MAX_RATIO: f64 = 21.0;

/// Contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`, in 1.0..=21.0.
///
/// Symmetric in its arguments.
///
/// ```
/// use color_vision::{contrast_ratio, Rgb};
///
/// assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::BLACK), 21.0);
/// assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// `ratio >= 4.5`
#[inline]
pub fn meets_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL
}

/// `ratio >= 7.0`
#[inline]
pub fn meets_aaa(ratio: f64) -> bool {
    ratio >= AAA_NORMAL
}

/// `ratio >= 3.0`
#[inline]
pub fn meets_aa_large(ratio: f64) -> bool {
    ratio >= AA_LARGE
}

/// `ratio >= 4.5`
#[inline]
pub fn meets_aaa_large(ratio: f64) -> bool {
    ratio >= AAA_LARGE
}

/// Highest conformance level a ratio reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WcagLevel {
    /// Below every threshold.
    Fail,
    /// AA for large text only.
    AaLarge,
    /// AA for all text (and AAA for large text).
    Aa,
    /// AAA for all text.
    Aaa,
}

impl WcagLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if meets_aaa(ratio) {
            WcagLevel::Aaa
        } else if meets_aa(ratio) {
            WcagLevel::Aa
        } else if meets_aa_large(ratio) {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WcagLevel::Fail => "fail",
            WcagLevel::AaLarge => "AA large",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}
