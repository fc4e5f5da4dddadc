//! Pairwise contrast analysis of a palette.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

use super::wcag::{
    contrast_ratio, meets_aa, meets_aa_large, meets_aaa, meets_aaa_large, WcagLevel,
};

/// Contrast between one pair of colors, with WCAG verdicts.
///
/// Derived on demand from the two colors; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Index of `first` in the analysed sequence.
    pub first_index: usize,
    /// Index of `second` in the analysed sequence.
    pub second_index: usize,
    pub first: Rgb,
    pub second: Rgb,
    /// Contrast ratio in 1.0..=21.0.
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub meets_aa_large: bool,
    pub meets_aaa_large: bool,
}

impl ContrastResult {
    /// Compare two colors. Indices are set to 0 and 1.
    pub fn between(first: Rgb, second: Rgb) -> Self {
        Self::for_pair((0, first), (1, second))
    }

    fn for_pair((first_index, first): (usize, Rgb), (second_index, second): (usize, Rgb)) -> Self {
        let ratio = contrast_ratio(first, second);
        Self {
            first_index,
            second_index,
            first,
            second,
            ratio,
            meets_aa: meets_aa(ratio),
            meets_aaa: meets_aaa(ratio),
            meets_aa_large: meets_aa_large(ratio),
            meets_aaa_large: meets_aaa_large(ratio),
        }
    }

    /// Highest level this pair reaches.
    pub fn level(&self) -> WcagLevel {
        WcagLevel::from_ratio(self.ratio)
    }
}

/// Contrast of every unordered pair of `colors`.
///
/// Pairs are emitted in nested ascending order: (0,1), (0,2), ..., (0,n-1),
/// (1,2), ... No self-pairs and no repeats, so the output has exactly
/// `n * (n - 1) / 2` entries, and none for `n <= 1`.
///
/// ```
/// use color_vision::{analyze_palette, Rgb};
///
/// let colors = [Rgb::BLACK, Rgb::WHITE, Rgb::new(255, 0, 0)];
/// let results = analyze_palette(&colors);
/// assert_eq!(results.len(), 3);
/// assert_eq!((results[0].first_index, results[0].second_index), (0, 1));
/// assert!(results[0].meets_aaa);
/// ```
pub fn analyze_palette(colors: &[Rgb]) -> Vec<ContrastResult> {
    let n = colors.len();
    let mut results = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, &first) in colors.iter().enumerate() {
        for (j, &second) in colors.iter().enumerate().skip(i + 1) {
            results.push(ContrastResult::for_pair((i, first), (j, second)));
        }
    }
    tracing::debug!(colors = n, pairs = results.len(), "Analysed palette contrast");
    results
}
