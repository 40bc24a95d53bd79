//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit red/green/blue channels, the hub for hex and CSS `rgb()`.
//! - [`Hsl`]: integer hue/saturation/lightness, CSS `hsl()`.
//!
//! # Example
//!
//! ```
//! use chroma_model::{Hsl, Rgb};
//!
//! let rgb = Rgb::from_hex("#ff0000").unwrap();
//! let hsl = Hsl::from(rgb);
//! assert_eq!(hsl.to_string(), "hsl(0,100%,50%)");
//! assert_eq!(hsl.to_rgb().to_hex(true), "#ff0000");
//! ```

mod css;
mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;
