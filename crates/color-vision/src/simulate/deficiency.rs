//! The closed set of simulated color-vision deficiencies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A category of color-vision impairment.
///
/// [`Normal`](VisionDeficiency::Normal) is the identity transform; every
/// other variant selects a fixed matrix from a
/// [`MatrixTable`](super::MatrixTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionDeficiency {
    /// Typical trichromatic vision.
    #[default]
    Normal,
    /// Missing long-wavelength (red) cones.
    Protanopia,
    /// Missing medium-wavelength (green) cones.
    Deuteranopia,
    /// Missing short-wavelength (blue) cones.
    Tritanopia,
    /// No functioning cones; luminance only.
    Achromatopsia,
}

impl VisionDeficiency {
    /// Every variant, in declaration order.
    pub const ALL: [VisionDeficiency; 5] = [
        VisionDeficiency::Normal,
        VisionDeficiency::Protanopia,
        VisionDeficiency::Deuteranopia,
        VisionDeficiency::Tritanopia,
        VisionDeficiency::Achromatopsia,
    ];

    /// The non-normal variants.
    pub const DEFICIENT: [VisionDeficiency; 4] = [
        VisionDeficiency::Protanopia,
        VisionDeficiency::Deuteranopia,
        VisionDeficiency::Tritanopia,
        VisionDeficiency::Achromatopsia,
    ];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            VisionDeficiency::Normal => "normal",
            VisionDeficiency::Protanopia => "protanopia",
            VisionDeficiency::Deuteranopia => "deuteranopia",
            VisionDeficiency::Tritanopia => "tritanopia",
            VisionDeficiency::Achromatopsia => "achromatopsia",
        }
    }

    /// Human-readable explanation of how this deficiency alters perception.
    pub const fn describe(self) -> &'static str {
        match self {
            VisionDeficiency::Protanopia => {
                "Difficulty telling reds from greens (missing red cones)"
            }
            VisionDeficiency::Deuteranopia => {
                "Difficulty telling reds from greens (missing green cones)"
            }
            VisionDeficiency::Tritanopia => {
                "Difficulty telling blues from yellows (missing blue cones)"
            }
            VisionDeficiency::Achromatopsia => "Black-and-white vision (no color perception)",
            VisionDeficiency::Normal => "Normal vision",
        }
    }

    #[inline]
    pub const fn is_normal(self) -> bool {
        matches!(self, VisionDeficiency::Normal)
    }
}

impl fmt::Display for VisionDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisionDeficiency {
    type Err = EngineError;

    /// Parse a deficiency from its name, case-insensitively.
    ///
    /// ```
    /// use color_vision::VisionDeficiency;
    ///
    /// let d: VisionDeficiency = "Protanopia".parse().unwrap();
    /// assert_eq!(d, VisionDeficiency::Protanopia);
    /// assert!("monochromacy".parse::<VisionDeficiency>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VisionDeficiency::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnsupportedDeficiencyType(s.to_string()))
    }
}
