use chroma_model::TintShade;
use serde::Serialize;

use super::Report;
use crate::error::CliError;

/// Result of the `palette` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteReport {
    /// Base color as hex
    pub base: String,
    pub steps: u32,
    /// Lighter colors, least to most toward white
    pub tints: Vec<String>,
    /// Darker colors, least to most toward black
    pub shades: Vec<String>,
}

/// Build the tint/shade palette of a `#rrggbb` color.
pub fn palette(hex: &str, steps: u32, show_hash: bool) -> Result<PaletteReport, CliError> {
    let builder = TintShade::from_hex(hex)?.with_steps(steps)?;
    let generated = builder.generate();

    tracing::debug!(
        base = %builder.base().to_hex_string(),
        steps,
        "Generated palette"
    );

    let to_hex = |colors: &[chroma_model::Rgb]| -> Vec<String> {
        colors.iter().map(|c| c.to_hex(show_hash)).collect()
    };

    Ok(PaletteReport {
        base: builder.base().to_hex(show_hash),
        steps,
        tints: to_hex(&generated.tints),
        shades: to_hex(&generated.shades),
    })
}

impl Report for PaletteReport {
    fn to_text(&self) -> String {
        let mut lines = vec![format!("base    {}", self.base)];
        lines.extend(self.tints.iter().map(|c| format!("tint    {c}")));
        lines.extend(self.shades.iter().map(|c| format!("shade   {c}")));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_model::ColorError;

    #[test]
    fn test_palette_black() {
        let report = palette("#000000", 5, true).unwrap();

        assert_eq!(report.base, "#000000");
        assert_eq!(report.steps, 5);
        assert_eq!(
            report.tints,
            vec!["#333333", "#666666", "#999999", "#cccccc", "#ffffff"]
        );
        assert_eq!(report.shades, vec!["#000000"; 5]);
    }

    #[test]
    fn test_palette_without_hash() {
        let report = palette("#000000", 2, false).unwrap();
        assert_eq!(report.base, "000000");
        assert_eq!(report.tints, vec!["7f7f7f", "ffffff"]);
    }

    #[test]
    fn test_palette_zero_steps() {
        let err = palette("#000000", 0, true).unwrap_err();
        assert!(matches!(err, CliError::Color(ColorError::ZeroSteps)));
    }

    #[test]
    fn test_palette_bad_hex() {
        let err = palette("black", 5, true).unwrap_err();
        assert!(matches!(err, CliError::Color(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_to_text_lists_tints_then_shades() {
        let report = palette("#ffffff", 1, true).unwrap();
        assert_eq!(
            report.to_text(),
            "base    #ffffff\ntint    #ffffff\nshade   #ffffff"
        );
    }
}
