//! 8-bit RGB color type
//!
//! [`Rgb`] is the color the engine operates on. The `u8` channels make the
//! [0,255] invariant structural: every float intermediate is clamped and
//! rounded before it is narrowed back into an `Rgb`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An 8-bit-per-channel sRGB color.
///
/// Serializes as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create a color from float channels on the 0..=255 scale.
    ///
    /// Each channel is mapped through `round(clamp(x, 0, 255))`. Rounding is
    /// [`f64::round`], which breaks ties away from zero (so 127.5 becomes 128).
    /// NaN maps to 0.
    ///
    /// # Example
    /// ```
    /// use color_vision::Rgb;
    ///
    /// let color = Rgb::from_clamped(-12.0, 127.5, 300.0);
    /// assert_eq!(color, Rgb::new(0, 128, 255));
    /// ```
    #[inline]
    pub fn from_clamped(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Create a color from integer channels, rejecting values outside 0..=255.
    ///
    /// Use [`Rgb::from_clamped`] when out-of-range values should be clamped
    /// instead.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self, EngineError> {
        let check = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| {
                EngineError::color_format(
                    format!("({r}, {g}, {b})"),
                    format!("{name} channel {value} outside 0..=255"),
                )
            })
        };
        Ok(Self::new(
            check("red", r)?,
            check("green", g)?,
            check("blue", b)?,
        ))
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// # Example
    /// ```
    /// use color_vision::Rgb;
    /// assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode(self.to_bytes()))
    }
}

#[inline]
fn clamp_channel(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    value.clamp(0.0, 255.0).round() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Rgb {
    type Err = EngineError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, and the shorthand `#RGB` / `RGB` (each
    /// digit doubled). The shorthand and bare forms are accepted on purpose,
    /// beyond the canonical `#RRGGBB`. Parsing is case-insensitive and trims surrounding
    /// whitespace. Anything else is [`EngineError::InvalidColorFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use color_vision::Rgb;
    ///
    /// let red: Rgb = "#FF0000".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// let teal: Rgb = "#0aa".parse().unwrap();
    /// assert_eq!(teal, Rgb::new(0x00, 0xaa, 0xaa));
    ///
    /// assert!("#ZZZZZZ".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            n => {
                return Err(EngineError::color_format(
                    s,
                    format!("expected 3 or 6 hex digits, got {n}"),
                ))
            }
        };

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| EngineError::color_format(s, e.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }
}
