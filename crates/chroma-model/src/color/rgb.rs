//! RGB color type
//!
//! Eight-bit red/green/blue channels with hex and CSS conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::css;
use super::hsl::Hsl;
use crate::error::ColorError;

/// A color as three 8-bit channels.
///
/// `Rgb` is an immutable value: the `with_*` methods return a modified copy
/// and leave the original untouched.
///
/// Channels default to zero, so an omitted channel and an explicit `0` are
/// the same color:
///
/// ```
/// use chroma_model::Rgb;
///
/// let red = Rgb { red: 255, ..Default::default() };
/// assert_eq!(red, Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub red: u8,
    /// Green channel (0..=255)
    pub green: u8,
    /// Blue channel (0..=255)
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from its three channels.
    #[inline]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a `#RRGGBB` hex string.
    ///
    /// Digits may be upper or lower case. Anything other than a `#` followed
    /// by exactly six hex digits is rejected.
    ///
    /// # Example
    /// ```
    /// use chroma_model::Rgb;
    /// let rgb = Rgb::from_hex("#FF8000").unwrap();
    /// assert_eq!(rgb, Rgb::new(255, 128, 0));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 {
            return Err(invalid());
        }

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| {
            tracing::debug!(input = hex, %e, "Rejected hex color");
            invalid()
        })?;

        Ok(Self::from(bytes))
    }

    /// Parse a CSS `rgb(r, g, b)` string.
    ///
    /// Channels may be separated by commas and/or whitespace and must each be
    /// an integer in 0..=255. Text after the closing parenthesis is ignored.
    ///
    /// # Example
    /// ```
    /// use chroma_model::Rgb;
    /// let rgb = Rgb::from_css("rgb(100, 105, 87)").unwrap();
    /// assert_eq!(rgb, Rgb::new(100, 105, 87));
    /// ```
    pub fn from_css(css: &str) -> Result<Self, ColorError> {
        let [red, green, blue] = css::RGB.parse(css).ok_or_else(|| {
            tracing::debug!(input = css, "Rejected rgb() notation");
            ColorError::InvalidRgb(css.to_string())
        })?;

        // The matcher only yields 0..=255 for channel tokens
        Ok(Self::new(red as u8, green as u8, blue as u8))
    }

    /// Return a copy with the red channel replaced.
    #[must_use]
    pub fn with_red(self, red: u8) -> Self {
        Self { red, ..self }
    }

    /// Return a copy with the green channel replaced.
    #[must_use]
    pub fn with_green(self, green: u8) -> Self {
        Self { green, ..self }
    }

    /// Return a copy with the blue channel replaced.
    #[must_use]
    pub fn with_blue(self, blue: u8) -> Self {
        Self { blue, ..self }
    }

    /// Format as lowercase hex, two digits per channel.
    ///
    /// # Example
    /// ```
    /// use chroma_model::Rgb;
    /// let rgb = Rgb::new(10, 171, 255);
    /// assert_eq!(rgb.to_hex(true), "#0aabff");
    /// assert_eq!(rgb.to_hex(false), "0aabff");
    /// ```
    pub fn to_hex(self, show_hash: bool) -> String {
        let digits = hex::encode(self.to_bytes());
        if show_hash {
            format!("#{digits}")
        } else {
            digits
        }
    }

    /// Format as `#rrggbb`.
    #[inline]
    pub fn to_hex_string(self) -> String {
        self.to_hex(true)
    }

    /// Format as `rgb(R,G%,B%)`.
    ///
    /// This is the historical string form, kept byte for byte for consumers
    /// that depend on it. It is not valid CSS; use the `Display` impl for
    /// that.
    pub fn to_legacy_string(self) -> String {
        format!("rgb({},{}%,{}%)", self.red, self.green, self.blue)
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Convert to HSL.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse a CSS `rgb(...)` string, see [`Rgb::from_css`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_css(s)
    }
}

impl fmt::Display for Rgb {
    /// Formats as CSS `rgb(R,G,B)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}
