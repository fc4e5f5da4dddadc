//! Naive dominant-color extraction.
//!
//! Counts exact RGB matches and ranks them by frequency. This is an
//! approximation: anti-aliased edges and gradients split one perceived color
//! into many near-duplicate shades, and nothing here merges them. Callers
//! that need real clustering must use a different component; the
//! [`ExtractionPolicy`] flag lets them tell which policy produced a result.

mod histogram;

pub use histogram::ColorHistogram;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// How dominant colors are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ExtractionPolicy {
    /// Exact RGB-triple frequency, descending; ties by first occurrence.
    ExactFrequency,
}

/// The policy [`extract_dominant_colors`] implements.
pub const POLICY: ExtractionPolicy = ExtractionPolicy::ExactFrequency;

/// The `count` most frequent exact colors in `buffer`, most frequent first.
///
/// Alpha is ignored. Returns fewer than `count` colors when the buffer has
/// fewer distinct ones, and nothing for `count == 0`.
///
/// ```
/// use color_vision::{extract_dominant_colors, PixelBuffer, Rgb};
///
/// let red = Rgb::new(255, 0, 0);
/// let blue = Rgb::new(0, 0, 255);
/// let mut colors = vec![red; 60];
/// colors.extend(vec![blue; 40]);
/// let buffer = PixelBuffer::from_colors(10, 10, &colors).unwrap();
///
/// assert_eq!(extract_dominant_colors(&buffer, 2), vec![red, blue]);
/// ```
pub fn extract_dominant_colors(buffer: &PixelBuffer, count: usize) -> Vec<Rgb> {
    let histogram = ColorHistogram::from_buffer(buffer);
    tracing::debug!(
        pixels = histogram.total(),
        distinct = histogram.distinct(),
        requested = count,
        policy = ?POLICY,
        "Extracting dominant colors"
    );
    histogram.top(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_blue_frequency_order() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        // Interleave so order of appearance does not decide
        let colors: Vec<Rgb> = (0..100)
            .map(|i| if i % 5 < 2 { blue } else { red })
            .collect();
        let buffer = PixelBuffer::from_colors(10, 10, &colors).unwrap();
        assert_eq!(extract_dominant_colors(&buffer, 2), vec![red, blue]);
    }

    #[test]
    fn test_fewer_distinct_than_requested() {
        let buffer = PixelBuffer::filled(5, 5, Rgb::new(1, 2, 3), 255);
        assert_eq!(extract_dominant_colors(&buffer, 5), vec![Rgb::new(1, 2, 3)]);
    }

    #[test]
    fn test_zero_count_and_empty_buffer() {
        let buffer = PixelBuffer::filled(2, 2, Rgb::WHITE, 255);
        assert!(extract_dominant_colors(&buffer, 0).is_empty());

        let empty = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(extract_dominant_colors(&empty, 3).is_empty());
    }

    #[test]
    fn test_near_duplicates_are_not_merged() {
        let colors = [Rgb::new(100, 100, 100), Rgb::new(100, 100, 101)];
        let buffer = PixelBuffer::from_colors(2, 1, &colors).unwrap();
        assert_eq!(extract_dominant_colors(&buffer, 2).len(), 2);
    }

    #[test]
    fn test_policy_flag() {
        assert_eq!(POLICY, ExtractionPolicy::ExactFrequency);
        assert_eq!(
            serde_json::to_string(&POLICY).unwrap(),
            "\"exact_frequency\""
        );
    }
}
