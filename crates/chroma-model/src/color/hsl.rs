//! HSL color type
//!
//! Hue in whole degrees, saturation and lightness in whole percent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::css;
use super::rgb::Rgb;
use crate::error::ColorError;

/// A color in the HSL cylinder.
///
/// Components are integers, so converting from RGB rounds; an RGB -> HSL ->
/// RGB round trip may be off by a few units per channel. Like [`Rgb`], `Hsl`
/// is an immutable value and the `with_*` methods return a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0..=360)
    pub hue: u16,
    /// Saturation in percent (0..=100)
    pub saturation: u8,
    /// Lightness in percent (0..=100)
    pub lightness: u8,
}

impl Hsl {
    #[inline]
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Parse a CSS `hsl(h, s%, l%)` string.
    ///
    /// The hue must be an integer in 0..=360, saturation and lightness
    /// integers in 0..=100. Any run of non-digits separates the components.
    ///
    /// # Example
    /// ```
    /// use chroma_model::Hsl;
    /// let hsl = Hsl::from_css("hsl(110, 80%, 80%)").unwrap();
    /// assert_eq!(hsl, Hsl::new(110, 80, 80));
    /// assert!(Hsl::from_css("hsl(400, 80%, 80%)").is_err());
    /// ```
    pub fn from_css(css: &str) -> Result<Self, ColorError> {
        let [hue, saturation, lightness] = css::HSL.parse(css).ok_or_else(|| {
            tracing::debug!(input = css, "Rejected hsl() notation");
            ColorError::InvalidHsl(css.to_string())
        })?;

        Ok(Self::new(hue, saturation as u8, lightness as u8))
    }

    /// Convert an RGB color to HSL.
    ///
    /// When two channels share the maximum, red wins over green and green
    /// over blue for the hue sector.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.red) / 255.0;
        let g = f64::from(rgb.green) / 255.0;
        let b = f64::from(rgb.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            // achromatic
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };

            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };

            (h / 6.0, s)
        };

        Self {
            hue: (360.0 * h).round() as u16,
            saturation: (s * 100.0).round() as u8,
            lightness: (l * 100.0).round() as u8,
        }
    }

    /// Parse a `#RRGGBB` hex string and convert it to HSL.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(hex).map(Self::from_rgb)
    }

    /// Return a copy with the hue replaced.
    #[must_use]
    pub fn with_hue(self, hue: u16) -> Self {
        Self { hue, ..self }
    }

    /// Return a copy with the saturation replaced.
    #[must_use]
    pub fn with_saturation(self, saturation: u8) -> Self {
        Self { saturation, ..self }
    }

    /// Return a copy with the lightness replaced.
    #[must_use]
    pub fn with_lightness(self, lightness: u8) -> Self {
        Self { lightness, ..self }
    }

    /// Convert to RGB.
    ///
    /// Each channel is `floor(255 * f(n))` with
    /// `f(n) = l - a * clamp(min(k - 3, 9 - k), -1, 1)`,
    /// `k = (n + h / 30) mod 12` and `a = s * min(l, 1 - l)`, evaluated at
    /// n = 0, 8, 4 for red, green, blue. Components set outside their
    /// documented ranges are clamped into 0..=255 after flooring.
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.hue);
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;

        let k = |n: f64| (n + h / 30.0) % 12.0;
        let a = s * l.min(1.0 - l);
        let f = |n: f64| l - a * (k(n) - 3.0).min(9.0 - k(n)).clamp(-1.0, 1.0);
        let channel = |n: f64| (255.0 * f(n)).floor().clamp(0.0, 255.0) as u8;

        Rgb::new(channel(0.0), channel(8.0), channel(4.0))
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_css(s)
    }
}

impl fmt::Display for Hsl {
    /// Formats as CSS `hsl(H,S%,L%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
    }
}
