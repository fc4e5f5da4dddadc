//! Serializable report shapes printed by the CLI (text or `--json`).

use color_vision::{ContrastResult, Lch, Rgb, VisionDeficiency, WcagLevel};
use serde::Serialize;

/// How one color looks under one deficiency
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeficiencyView {
    pub deficiency: VisionDeficiency,
    pub description: &'static str,
    pub seen: Rgb,
    /// CIE76 distance between the original and the simulated color
    pub delta_e: f64,
}

/// A color seen under several deficiencies
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorReport {
    pub color: Rgb,
    pub views: Vec<DeficiencyView>,
}

/// Contrast of a single pair with its summary level
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContrastReport {
    #[serde(flatten)]
    pub result: ContrastResult,
    pub level: WcagLevel,
}

/// Pairwise contrast of a palette as perceived under one deficiency
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaletteReport {
    pub deficiency: VisionDeficiency,
    /// Input colors after simulation, in input order
    pub colors: Vec<Rgb>,
    pub pairs: Vec<ContrastReport>,
    /// Number of pairs below the AA threshold for normal text
    pub failing_aa: usize,
}

/// LCh coordinates of a color and the color recovered from them
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LchReport {
    pub color: Rgb,
    pub lch: Lch,
    pub round_trip: Rgb,
}

/// Dominant colors of an image
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtractReport {
    pub width: usize,
    pub height: usize,
    pub distinct: usize,
    pub colors: Vec<RankedColor>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedColor {
    pub color: Rgb,
    pub pixels: usize,
    /// Share of all pixels, 0.0..=1.0
    pub share: f64,
}
