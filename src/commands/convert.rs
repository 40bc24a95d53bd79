use chroma_model::{Hsl, Rgb};
use serde::Serialize;

use super::Report;
use crate::error::CliError;

/// Notation of a color string, detected from its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

/// Detect which notation `input` is written in.
///
/// Only the prefix is inspected; the full parse happens afterwards.
pub fn detect_notation(input: &str) -> Option<Notation> {
    if input.starts_with('#') {
        return Some(Notation::Hex);
    }

    match input.get(..3).map(str::to_ascii_lowercase).as_deref() {
        Some("rgb") => Some(Notation::Rgb),
        Some("hsl") => Some(Notation::Hsl),
        _ => None,
    }
}

/// Result of the `convert` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    /// The string as given
    pub input: String,
    /// Hex form (with or without `#`)
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// CSS `rgb()` form
    pub css_rgb: String,
    /// CSS `hsl()` form
    pub css_hsl: String,
}

/// Parse `input` in any supported notation and express it in all of them.
///
/// An HSL input is reported as given rather than re-derived from its RGB
/// conversion, which would round.
pub fn convert(input: &str, show_hash: bool) -> Result<ConvertReport, CliError> {
    let (rgb, hsl) = match detect_notation(input) {
        Some(Notation::Hex) => {
            let rgb = Rgb::from_hex(input)?;
            (rgb, rgb.to_hsl())
        }
        Some(Notation::Rgb) => {
            let rgb = Rgb::from_css(input)?;
            (rgb, rgb.to_hsl())
        }
        Some(Notation::Hsl) => {
            let hsl = Hsl::from_css(input)?;
            (hsl.to_rgb(), hsl)
        }
        None => return Err(CliError::UnknownNotation(input.to_string())),
    };

    tracing::debug!(input, %rgb, %hsl, "Converted color");

    Ok(ConvertReport {
        input: input.to_string(),
        hex: rgb.to_hex(show_hash),
        rgb,
        hsl,
        css_rgb: rgb.to_string(),
        css_hsl: hsl.to_string(),
    })
}

impl Report for ConvertReport {
    fn to_text(&self) -> String {
        format!(
            "hex  {}\nrgb  {}\nhsl  {}",
            self.hex, self.css_rgb, self.css_hsl
        )
    }
}
