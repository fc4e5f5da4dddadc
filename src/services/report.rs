//! Builds the reports the CLI renders, by composing the simulator with the
//! contrast analyzer.

use color_vision::{
    analyze_palette, describe, from_perceptual_space, to_perceptual_space, ColorHistogram,
    ContrastResult, PixelBuffer, Rgb, Simulator, VisionDeficiency,
};

use crate::models::{
    ColorReport, ContrastReport, DeficiencyView, ExtractReport, LchReport, PaletteReport,
    RankedColor,
};

/// Builds reports against one simulator
#[derive(Debug, Clone, Copy)]
pub struct ReportService<'a> {
    simulator: Simulator<'a>,
}

impl Default for ReportService<'static> {
    fn default() -> Self {
        Self::new(Simulator::default())
    }
}

impl<'a> ReportService<'a> {
    pub fn new(simulator: Simulator<'a>) -> Self {
        Self { simulator }
    }

    /// How `color` appears under each of `deficiencies`.
    pub fn color(&self, color: Rgb, deficiencies: &[VisionDeficiency]) -> ColorReport {
        let original = to_perceptual_space(color);
        let views = deficiencies
            .iter()
            .map(|&deficiency| {
                let seen = self.simulator.transform_color(color, deficiency);
                DeficiencyView {
                    deficiency,
                    description: describe(deficiency),
                    seen,
                    delta_e: original.delta_e(to_perceptual_space(seen)),
                }
            })
            .collect();
        ColorReport { color, views }
    }

    /// Contrast of a single pair.
    pub fn contrast(&self, first: Rgb, second: Rgb) -> ContrastReport {
        contrast_report(ContrastResult::between(first, second))
    }

    /// Pairwise contrast of `colors` after simulating `deficiency`.
    pub fn palette(&self, colors: &[Rgb], deficiency: VisionDeficiency) -> PaletteReport {
        let seen: Vec<Rgb> = colors
            .iter()
            .map(|&c| self.simulator.transform_color(c, deficiency))
            .collect();
        let pairs: Vec<ContrastReport> = analyze_palette(&seen)
            .into_iter()
            .map(contrast_report)
            .collect();
        let failing_aa = pairs.iter().filter(|p| !p.result.meets_aa).count();

        tracing::debug!(
            deficiency = %deficiency,
            colors = colors.len(),
            pairs = pairs.len(),
            failing_aa,
            "Analyzed palette"
        );
        PaletteReport {
            deficiency,
            colors: seen,
            pairs,
            failing_aa,
        }
    }

    /// One palette report per deficiency, in the given order.
    pub fn palette_audit(
        &self,
        colors: &[Rgb],
        deficiencies: &[VisionDeficiency],
    ) -> Vec<PaletteReport> {
        deficiencies
            .iter()
            .map(|&d| self.palette(colors, d))
            .collect()
    }
}

fn contrast_report(result: ContrastResult) -> ContrastReport {
    ContrastReport {
        level: result.level(),
        result,
    }
}

/// LCh coordinates of `color` and the color they convert back to.
pub fn lch_report(color: Rgb) -> LchReport {
    let lch = to_perceptual_space(color);
    LchReport {
        color,
        lch,
        round_trip: from_perceptual_space(lch),
    }
}

/// The `count` dominant colors of `buffer` with their pixel shares.
pub fn extract_report(buffer: &PixelBuffer, count: usize) -> ExtractReport {
    let histogram = ColorHistogram::from_buffer(buffer);
    let total = histogram.total();
    let colors = histogram
        .ranked()
        .into_iter()
        .take(count)
        .map(|(color, pixels)| RankedColor {
            color,
            pixels,
            share: if total == 0 {
                0.0
            } else {
                pixels as f64 / total as f64
            },
        })
        .collect();

    ExtractReport {
        width: buffer.width(),
        height: buffer.height(),
        distinct: histogram.distinct(),
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_vision::{extract_dominant_colors, WcagLevel};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color_report_covers_requested_deficiencies() {
        let service = ReportService::default();
        let red = Rgb::new(255, 0, 0);

        let report = service.color(red, &VisionDeficiency::ALL);

        assert_eq!(report.views.len(), 5);
        assert_eq!(report.views[0].deficiency, VisionDeficiency::Normal);
        assert_eq!(report.views[0].seen, red);
        assert_eq!(report.views[0].delta_e, 0.0);
        assert!(report.views[1].delta_e > 0.0);
        assert_eq!(report.views[1].description, describe(VisionDeficiency::Protanopia));
    }

    #[test]
    fn test_contrast_report_level() {
        let service = ReportService::default();
        let report = service.contrast(Rgb::WHITE, Rgb::BLACK);
        assert_eq!(report.result.ratio, 21.0);
        assert_eq!(report.level, WcagLevel::Aaa);
    }

    #[test]
    fn test_palette_is_simulated_before_analysis() {
        let service = ReportService::default();
        let colors = [
            "#d32f2f".parse::<Rgb>().unwrap(),
            "#388e3c".parse::<Rgb>().unwrap(),
        ];

        let normal = service.palette(&colors, VisionDeficiency::Normal);
        let protan = service.palette(&colors, VisionDeficiency::Protanopia);

        assert_eq!(normal.colors, colors.to_vec());
        assert_ne!(protan.colors, colors.to_vec());
        assert_eq!(protan.pairs.len(), 1);
        assert_eq!(protan.pairs[0].result.first, protan.colors[0]);
        assert_eq!(normal.failing_aa, 1);
        assert_eq!(protan.failing_aa, 1);
    }

    #[test]
    fn test_palette_audit_order() {
        let service = ReportService::default();
        let colors = [Rgb::WHITE, Rgb::BLACK, Rgb::new(128, 0, 0)];
        let audit = service.palette_audit(
            &colors,
            &[VisionDeficiency::Tritanopia, VisionDeficiency::Achromatopsia],
        );

        let order: Vec<_> = audit.iter().map(|r| r.deficiency).collect();
        assert_eq!(
            order,
            vec![VisionDeficiency::Tritanopia, VisionDeficiency::Achromatopsia]
        );
        assert!(audit.iter().all(|r| r.pairs.len() == 3));
    }

    #[test]
    fn test_lch_report_round_trip() {
        let grey = Rgb::new(128, 128, 128);
        let report = lch_report(grey);
        assert!(report.lch.c < 0.01);
        assert!(report.round_trip.r.abs_diff(128) <= 2);
    }

    #[test]
    fn test_extract_report_matches_engine() {
        let mut colors = vec![Rgb::new(255, 0, 0); 60];
        colors.extend(vec![Rgb::new(0, 0, 255); 40]);
        let buffer = PixelBuffer::from_colors(10, 10, &colors).unwrap();

        let report = extract_report(&buffer, 5);

        assert_eq!(report.distinct, 2);
        let ranked: Vec<_> = report.colors.iter().map(|c| c.color).collect();
        assert_eq!(ranked, extract_dominant_colors(&buffer, 5));
        assert_eq!(report.colors[0].pixels, 60);
        assert!((report.colors[0].share - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_extract_report_empty_buffer() {
        let buffer = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        let report = extract_report(&buffer, 3);
        assert!(report.colors.is_empty());
        assert_eq!(report.distinct, 0);
    }
}
