//! chroma-model: RGB, HSL and hex color conversion
//!
//! Small, pure value types for moving a color between its hex, RGB and HSL
//! representations, parsing the CSS `rgb()`/`hsl()` notations, and building
//! tint/shade palettes.
//!
//! # Quick Start
//!
//! ```
//! use chroma_model::{Hsl, Rgb};
//!
//! let rgb: Rgb = "rgb(100, 105, 87)".parse().unwrap();
//! assert_eq!(rgb.to_hex(true), "#646957");
//!
//! let hsl = Hsl::from_rgb(rgb);
//! let lighter = hsl.with_lightness(80).to_rgb();
//! assert!(lighter.red > rgb.red);
//! ```
//!
//! # Palettes
//!
//! ```
//! let colors = chroma_model::tint_shade_palette("#808080").unwrap();
//! assert_eq!(colors[..5], ["#999999", "#b2b2b2", "#cccccc", "#e5e5e5", "#ffffff"]);
//! ```
//!
//! # Precision
//!
//! [`Rgb`] stores 8-bit channels and [`Hsl`] stores whole degrees and
//! percentages. Hex <-> RGB is lossless; RGB -> HSL -> RGB is not, since
//! every HSL component is rounded and every RGB channel is floored on the
//! way back.
//!
//! # Logging
//!
//! Rejected inputs are reported at `debug` level and palette intermediates
//! at `trace` level through [`tracing`]. Nothing is printed unless the
//! application installs a subscriber.

mod color;
mod error;
mod palette;

#[cfg(test)]
mod domain_tests;

pub use color::{Hsl, Rgb};
pub use error::ColorError;
pub use palette::{tint_shade_palette, Palette, TintShade, DEFAULT_STEPS};
