//! Tint/shade palette generation.
//!
//! A palette is built by stepping each channel of a base color linearly by
//! its distance to white. Tints add the distance, shades subtract the same
//! distance and stop at black.

use serde::Serialize;

use crate::color::Rgb;
use crate::error::ColorError;

/// Number of tints (and of shades) produced when no step count is given.
pub const DEFAULT_STEPS: u32 = 5;

/// Builder for a tint/shade palette around a base color.
///
/// # Example
///
/// ```
/// use chroma_model::{Rgb, TintShade};
///
/// let palette = TintShade::new(Rgb::new(0, 0, 0)).generate();
/// assert_eq!(palette.tints.last(), Some(&Rgb::new(255, 255, 255)));
/// assert!(palette.shades.iter().all(|&c| c == Rgb::new(0, 0, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintShade {
    base: Rgb,
    steps: u32,
}

impl TintShade {
    /// Create a builder with [`DEFAULT_STEPS`] steps.
    pub fn new(base: Rgb) -> Self {
        Self {
            base,
            steps: DEFAULT_STEPS,
        }
    }

    /// Create a builder from a `#RRGGBB` base color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(hex).map(Self::new)
    }

    /// Set the number of tints (and shades) to produce.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ZeroSteps`] when `steps` is zero.
    pub fn with_steps(self, steps: u32) -> Result<Self, ColorError> {
        if steps == 0 {
            return Err(ColorError::ZeroSteps);
        }
        Ok(Self { steps, ..self })
    }

    pub fn base(&self) -> Rgb {
        self.base
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Generate the palette.
    ///
    /// For step `i` in `1..=steps` and each channel `c` with
    /// `dif = 255 - c`, the tint is `floor(c + i * dif / steps)` and the
    /// shade is `floor(c - i * dif / steps)`, clamped at 0.
    pub fn generate(&self) -> Palette {
        let [r, g, b] = self.base.to_bytes();
        tracing::trace!(
            base = %self.base.to_hex_string(),
            steps = self.steps,
            r_dif = 255 - r,
            g_dif = 255 - g,
            b_dif = 255 - b,
            "Generating tint/shade palette"
        );

        let (tints, shades) = (1..=self.steps)
            .map(|i| {
                let (r_light, r_dark) = step_channel(r, i, self.steps);
                let (g_light, g_dark) = step_channel(g, i, self.steps);
                let (b_light, b_dark) = step_channel(b, i, self.steps);

                let tint = Rgb::new(r_light, g_light, b_light);
                let shade = Rgb::new(r_dark, g_dark, b_dark);
                tracing::trace!(step = i, tint = %tint.to_hex_string(), shade = %shade.to_hex_string());
                (tint, shade)
            })
            .unzip();

        Palette { tints, shades }
    }
}

/// Step one channel `i` of `steps` toward white and toward black.
fn step_channel(channel: u8, i: u32, steps: u32) -> (u8, u8) {
    let c = f64::from(channel);
    let dif = 255.0 - c;
    let offset = f64::from(i) * dif / f64::from(steps);

    let lighter = (c + offset).floor();
    let darker = (c - offset).floor().max(0.0);
    (lighter as u8, darker as u8)
}

/// A generated tint/shade palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Lighter colors, from least to most toward white
    pub tints: Vec<Rgb>,
    /// Darker colors, from least to most toward black
    pub shades: Vec<Rgb>,
}

impl Palette {
    /// All colors: tints first, then shades.
    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.tints.iter().chain(self.shades.iter())
    }

    /// Format all colors as hex, tints first, then shades.
    pub fn to_hex_strings(&self, show_hash: bool) -> Vec<String> {
        self.iter().map(|c| c.to_hex(show_hash)).collect()
    }
}

/// Generate the five tints and five shades of a `#RRGGBB` color as hex
/// strings, tints first.
///
/// # Example
///
/// ```
/// let colors = chroma_model::tint_shade_palette("#000000").unwrap();
/// assert_eq!(colors.len(), 10);
/// assert_eq!(colors[0], "#333333");
/// assert_eq!(colors[4], "#ffffff");
/// assert_eq!(colors[5], "#000000");
/// ```
pub fn tint_shade_palette(hex: &str) -> Result<Vec<String>, ColorError> {
    Ok(TintShade::from_hex(hex)?.generate().to_hex_strings(true))
}
