//! Exact-match color frequency counting.

use std::collections::HashMap;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bin {
    count: usize,
    /// Pixel index of the first occurrence, for stable tie-breaking.
    first_seen: usize,
}

/// Frequency of every exact RGB triple in a set of pixels.
///
/// Alpha is ignored and near-identical shades are counted separately.
/// Histograms over disjoint pixel ranges can be combined with
/// [`ColorHistogram::merge`]; the result does not depend on merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    bins: HashMap<Rgb, Bin>,
    total: usize,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pixel of `buffer`.
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self::from_pixels(buffer.as_bytes(), 0)
    }

    /// Count RGBA pixels from a byte slice whose first pixel has index
    /// `first_index` in the whole image.
    ///
    /// Trailing bytes that do not form a full pixel are ignored.
    pub fn from_pixels(rgba: &[u8], first_index: usize) -> Self {
        let mut histogram = Self::new();
        for (offset, pixel) in rgba.chunks_exact(4).enumerate() {
            histogram.add(Rgb::new(pixel[0], pixel[1], pixel[2]), first_index + offset);
        }
        histogram
    }

    /// Record one occurrence of `color` at pixel `index`.
    pub fn add(&mut self, color: Rgb, index: usize) {
        self.total += 1;
        self.bins
            .entry(color)
            .and_modify(|bin| {
                bin.count += 1;
                bin.first_seen = bin.first_seen.min(index);
            })
            .or_insert(Bin {
                count: 1,
                first_seen: index,
            });
    }

    /// Fold `other` into `self`. Commutative and associative.
    pub fn merge(&mut self, other: ColorHistogram) {
        self.total += other.total;
        for (color, bin) in other.bins {
            self.bins
                .entry(color)
                .and_modify(|existing| {
                    existing.count += bin.count;
                    existing.first_seen = existing.first_seen.min(bin.first_seen);
                })
                .or_insert(bin);
        }
    }

    /// Occurrences of `color`.
    pub fn count(&self, color: Rgb) -> usize {
        self.bins.get(&color).map_or(0, |bin| bin.count)
    }

    /// Number of distinct colors.
    pub fn distinct(&self) -> usize {
        self.bins.len()
    }

    /// Number of pixels counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Colors with their counts, most frequent first.
    ///
    /// Equal counts are ordered by first occurrence in the image.
    pub fn ranked(&self) -> Vec<(Rgb, usize)> {
        let mut entries: Vec<(Rgb, Bin)> = self.bins.iter().map(|(&c, &b)| (c, b)).collect();
        entries.sort_unstable_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        entries.into_iter().map(|(c, b)| (c, b.count)).collect()
    }

    /// The `count` most frequent colors (fewer if there are fewer distinct).
    pub fn top(&self, count: usize) -> Vec<Rgb> {
        self.ranked()
            .into_iter()
            .take(count)
            .map(|(color, _)| color)
            .collect()
    }
}
