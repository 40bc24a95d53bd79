//! Unified error type for the chroma-model public API.
//!
//! [`ColorError`] covers every way a parse or palette request can fail, so
//! application code can propagate it with `?`.

use thiserror::Error;

/// Error returned by color parsing and palette generation.
///
/// Parsing never yields partial results: a string either produces a complete
/// color or one of these errors.
///
/// # Example
///
/// ```
/// use chroma_model::{ColorError, Rgb};
///
/// fn parse(input: &str) -> Result<Rgb, ColorError> {
///     let rgb: Rgb = input.parse()?;
///     Ok(rgb)
/// }
///
/// assert!(parse("rgb(1, 2, 3)").is_ok());
/// assert!(parse("not a color").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// String does not match the CSS `rgb(r, g, b)` notation
    #[error("not a valid RGB color: {0:?}")]
    InvalidRgb(String),

    /// String does not match the CSS `hsl(h, s%, l%)` notation
    #[error("not a valid HSL color: {0:?}")]
    InvalidHsl(String),

    /// String is not `#` followed by six hexadecimal digits
    #[error("not a valid hex color: {0:?}")]
    InvalidHex(String),

    /// Palette requested with zero interpolation steps
    #[error("palette needs at least one step")]
    ZeroSteps,
}
