//! Palette generation
//!
//! Tints and shades of a base color, stepped linearly toward white and
//! black.

mod tint_shade;

pub use tint_shade::{tint_shade_palette, Palette, TintShade, DEFAULT_STEPS};
